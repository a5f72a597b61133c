use quick_error::quick_error;

quick_error! {
    #[derive(Debug)]
    pub enum MazeLoad {
        Io(err: std::io::Error) {
            from()
            display("failed to read maze source: {}", err)
        }
        MissingLine(row: usize, size: usize) {
            display("maze source has no line for row {row}, expected {size} lines")
        }
        ShortLine(row: usize, got: usize, size: usize) {
            display("line {row} is {got} characters long, expected {size}")
        }
        NoStart {
            display("maze source contains no 'P' start cell")
        }
        MultipleStarts {
            display("maze source contains more than one 'P' start cell")
        }
        Empty {
            display("maze source is empty")
        }
    }
}
