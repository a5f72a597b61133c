use std::collections::HashMap;
use std::time::Duration;

use crossbeam::channel::{unbounded, Receiver, Sender};
use tracing::{debug, error};

use super::{channels, errors, Message};

/// Bus of named in-process channels.
///
/// Cloning the bus clones the channel handles, so every clone reads from and
/// writes to the same underlying queues.
#[derive(Clone)]
pub struct Bus {
    channels: HashMap<String, (Sender<Message>, Receiver<Message>)>,
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    pub fn new() -> Self {
        let mut channels = HashMap::new();
        channels::ALL.iter().for_each(|name| {
            channels.insert(name.to_string(), unbounded());
        });

        Self { channels }
    }

    pub fn read(&self, ch_name: String) -> Result<Message, errors::Bus> {
        let receiver = self.channel_get(ch_name)?.1;
        let msg = receiver.recv_timeout(Duration::from_nanos(1))?;

        debug!("successfully read from channel: {msg:?}");

        Ok(msg)
    }

    pub fn write(&mut self, ch_name: String, msg: Message) -> Result<(), errors::Bus> {
        debug!("writing to channel; channel: {ch_name}, message: {msg:?}");
        let sender = self.channel_get(ch_name)?.0;
        Ok(sender.send(msg)?)
    }

    fn channel_get(
        &self,
        ch_name: String,
    ) -> Result<(Sender<Message>, Receiver<Message>), errors::Bus> {
        match self.channels.get(&ch_name) {
            Some(channel) => Ok(channel.clone()),
            None => {
                error!("channel not found: {ch_name}");
                Err(errors::Bus::ChannelNotFound(ch_name))
            }
        }
    }
}
