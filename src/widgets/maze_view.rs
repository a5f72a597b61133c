use egui::{Color32, Rect, Sense, Vec2};

use crate::mazeviz::maze::{Marker, Maze, Point};

use super::AppWidget;

const WALL_COLOR: Color32 = Color32::BLACK;
const OPEN_COLOR: Color32 = Color32::WHITE;
const ENDPOINT_COLOR: Color32 = Color32::from_rgb(255, 0, 255);
const VISITING_COLOR: Color32 = Color32::YELLOW;
const DEAD_END_COLOR: Color32 = Color32::RED;
const SOLUTION_COLOR: Color32 = Color32::GREEN;
const PLAYER_COLOR: Color32 = Color32::RED;

/// Paints the grid as one filled rect per cell, one frame at a time.
pub struct MazeView<'a> {
    maze: &'a Maze,
}

impl<'a> MazeView<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze }
    }

    fn cell_color(&self, p: Point, marker: Marker) -> Color32 {
        // player overlay wins over everything else
        if p == self.maze.player() {
            return PLAYER_COLOR;
        }

        match marker {
            Marker::Start | Marker::Goal => ENDPOINT_COLOR,
            Marker::Visiting => VISITING_COLOR,
            Marker::DeadEnd => DEAD_END_COLOR,
            Marker::Solution => SOLUTION_COLOR,
            Marker::Open => OPEN_COLOR,
            Marker::Wall => WALL_COLOR,
        }
    }
}

impl AppWidget for MazeView<'_> {
    fn show(&mut self, ui: &mut egui::Ui) {
        let tile = self.maze.tile_size();
        let side = self.maze.size() as f32 * tile;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let origin = response.rect.min;

        for (y, row) in self.maze.rows().enumerate() {
            for (x, marker) in row.iter().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let min = origin + Vec2::new(x as f32 * tile, y as f32 * tile);
                let rect = Rect::from_min_size(min, Vec2::splat(tile));

                painter.rect_filled(rect, 0.0, self.cell_color(p, *marker));
            }
        }
    }
}

#[cfg(test)]
mod maze_view_tests {
    use super::*;

    #[test]
    fn test_color_priority() {
        let maze = Maze::parse("@@@\n@P \n@ F", 3, 10.0).unwrap();
        let view = MazeView::new(&maze);

        // player overlay beats the start marker
        assert_eq!(
            view.cell_color(maze.player(), Marker::Start),
            PLAYER_COLOR
        );
        assert_eq!(
            view.cell_color(Point::new(2, 2), Marker::Goal),
            ENDPOINT_COLOR
        );
        assert_eq!(
            view.cell_color(Point::new(2, 1), Marker::Visiting),
            VISITING_COLOR
        );
        assert_eq!(
            view.cell_color(Point::new(2, 1), Marker::DeadEnd),
            DEAD_END_COLOR
        );
        assert_eq!(
            view.cell_color(Point::new(2, 1), Marker::Solution),
            SOLUTION_COLOR
        );
        assert_eq!(view.cell_color(Point::new(2, 1), Marker::Open), OPEN_COLOR);
        assert_eq!(view.cell_color(Point::new(0, 0), Marker::Wall), WALL_COLOR);
    }
}
