//! Line-oriented command language for driving the carousel from a terminal.

use carousel_core::input::InputEvent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostCommand {
    Event(InputEvent),
    /// Touch start at 0 followed by touch end at `-dx`.
    Swipe { dx: i32 },
    /// Delay before reading the next command.
    Wait { ms: u64 },
    Quit,
}

impl HostCommand {
    /// Input events this command feeds to the controller, in order.
    pub fn events(self) -> heapless::Vec<InputEvent, 2> {
        let mut events = heapless::Vec::new();
        match self {
            Self::Event(event) => {
                let _ = events.push(event);
            }
            Self::Swipe { dx } => {
                let _ = events.push(InputEvent::TouchStart { x: 0 });
                let _ = events.push(InputEvent::TouchEnd {
                    x: dx.saturating_neg(),
                });
            }
            Self::Wait { .. } | Self::Quit => {}
        }
        events
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandError {
    Unknown,
    MissingArgument,
    InvalidArgument,
}

/// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<HostCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next();

    let command = match verb.to_ascii_lowercase().as_str() {
        "click" => HostCommand::Event(InputEvent::ItemClick(parse_arg(arg)?)),
        "dot" => HostCommand::Event(InputEvent::DotClick(parse_arg(arg)?)),
        "prev" => HostCommand::Event(InputEvent::Prev),
        "next" => HostCommand::Event(InputEvent::Next),
        "play" | "pause" => HostCommand::Event(InputEvent::PlayPause),
        "enter" => HostCommand::Event(InputEvent::HoverEnter(parse_arg(arg)?)),
        "leave" => HostCommand::Event(InputEvent::HoverLeave(parse_arg(arg)?)),
        "touch" => HostCommand::Event(InputEvent::TouchStart {
            x: parse_arg(arg)?,
        }),
        "release" => HostCommand::Event(InputEvent::TouchEnd {
            x: parse_arg(arg)?,
        }),
        "swipe" => HostCommand::Swipe {
            dx: parse_arg(arg)?,
        },
        "resize" => HostCommand::Event(InputEvent::Resize {
            width: parse_arg(arg)?,
        }),
        "theme" => HostCommand::Event(InputEvent::ThemeToggle),
        "wait" => HostCommand::Wait {
            ms: parse_arg(arg)?,
        },
        "quit" | "exit" => HostCommand::Quit,
        _ => return Err(CommandError::Unknown),
    };

    Ok(Some(command))
}

fn parse_arg<T: core::str::FromStr>(arg: Option<&str>) -> Result<T, CommandError> {
    arg.ok_or(CommandError::MissingArgument)?
        .parse()
        .map_err(|_| CommandError::InvalidArgument)
}
