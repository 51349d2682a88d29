use std::{
    io::{self, BufRead},
    thread,
    time::Duration,
};

use carousel_host::input::{
    command::{HostCommand, parse_command},
    queue::InputQueue,
};
use log::{info, warn};

/// Read commands from stdin on a dedicated thread and feed the input queue.
pub(super) fn spawn(queue: &'static InputQueue) {
    let spawned = thread::Builder::new()
        .name("carousel-stdin".into())
        .spawn(move || read_commands(queue));

    if let Err(err) = spawned {
        warn!("input: stdin reader unavailable: {}", err);
    }
}

fn read_commands(queue: &InputQueue) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("input: stdin read failed: {}", err);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Some(HostCommand::Quit)) => {
                queue.request_quit();
                return;
            }
            Ok(Some(HostCommand::Wait { ms })) => thread::sleep(Duration::from_millis(ms)),
            Ok(Some(command)) => {
                for event in command.events() {
                    if !queue.push(event) {
                        warn!("input: queue full; dropped {:?}", event);
                    }
                }
            }
            Ok(None) => {}
            Err(err) => warn!("input: {:?} in command {:?}", err, line.trim()),
        }
    }

    info!("input: stdin closed; carousel keeps running until interrupted");
}
