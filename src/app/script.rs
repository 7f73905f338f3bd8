// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/script.rs
//
// Text gesture scripts for replaying input against a crop widget.
//
// One message per line, blank lines and `#` comments are skipped:
//
//   origin 10 20
//   focus | blur
//   down X Y | move X Y | up | leave
//   touch-start X Y [X Y ...] | touch-move X Y [X Y ...]
//   touch-end | touch-cancel
//   key ArrowLeft | key - | key = | key Escape

use anyhow::{Context, anyhow, bail};

use crate::app::message::{CropMessage, Key};
use crate::domain::Point;

/// Parse a whole script.
pub fn parse_script(text: &str) -> anyhow::Result<Vec<CropMessage>> {
    let mut messages = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let message = parse_line(line).with_context(|| format!("line {}: `{line}`", index + 1))?;
        messages.push(message);
    }
    Ok(messages)
}

fn parse_line(line: &str) -> anyhow::Result<CropMessage> {
    let mut words = line.split_whitespace();
    let command = words.next().ok_or_else(|| anyhow!("empty line"))?;
    let args: Vec<&str> = words.collect();

    let message = match command {
        "origin" => CropMessage::Origin(single_point(&args)?),
        "focus" => no_args(&args, CropMessage::Focus(true))?,
        "blur" => no_args(&args, CropMessage::Focus(false))?,
        "down" => CropMessage::PointerDown(single_point(&args)?),
        "move" => CropMessage::PointerMove(single_point(&args)?),
        "up" => no_args(&args, CropMessage::PointerUp)?,
        "leave" => no_args(&args, CropMessage::PointerLeave)?,
        "touch-start" => CropMessage::TouchStart(points(&args)?),
        "touch-move" => CropMessage::TouchMove(points(&args)?),
        "touch-end" => no_args(&args, CropMessage::TouchEnd)?,
        "touch-cancel" => no_args(&args, CropMessage::TouchCancel)?,
        "key" => {
            let [name] = args.as_slice() else {
                bail!("expected one key name");
            };
            let key = Key::from_name(name).ok_or_else(|| anyhow!("unknown key `{name}`"))?;
            CropMessage::Key(key)
        }
        other => bail!("unknown command `{other}`"),
    };
    Ok(message)
}

fn no_args(args: &[&str], message: CropMessage) -> anyhow::Result<CropMessage> {
    if !args.is_empty() {
        bail!("unexpected arguments {args:?}");
    }
    Ok(message)
}

fn single_point(args: &[&str]) -> anyhow::Result<Point> {
    let points = points(args)?;
    match points.as_slice() {
        [point] => Ok(*point),
        _ => bail!("expected exactly one X Y pair"),
    }
}

fn points(args: &[&str]) -> anyhow::Result<Vec<Point>> {
    if args.is_empty() || args.len() % 2 != 0 {
        bail!("expected X Y pairs, got {} values", args.len());
    }
    args.chunks(2)
        .map(|pair| -> anyhow::Result<Point> {
            let x = pair[0]
                .parse::<i32>()
                .with_context(|| format!("invalid x `{}`", pair[0]))?;
            let y = pair[1]
                .parse::<i32>()
                .with_context(|| format!("invalid y `{}`", pair[1]))?;
            Ok(Point::new(x, y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let script = "
            # set up
            origin 10 -4
            focus
            down 1 2
            move 3 4   # drag
            up
            leave
            touch-start 5 6 7 8
            touch-move 9 10
            touch-end
            touch-cancel
            key ArrowLeft
            key =
            blur
        ";
        let messages = parse_script(script).unwrap();
        assert_eq!(
            messages,
            vec![
                CropMessage::Origin(Point::new(10, -4)),
                CropMessage::Focus(true),
                CropMessage::PointerDown(Point::new(1, 2)),
                CropMessage::PointerMove(Point::new(3, 4)),
                CropMessage::PointerUp,
                CropMessage::PointerLeave,
                CropMessage::TouchStart(vec![Point::new(5, 6), Point::new(7, 8)]),
                CropMessage::TouchMove(vec![Point::new(9, 10)]),
                CropMessage::TouchEnd,
                CropMessage::TouchCancel,
                CropMessage::Key(Key::ArrowLeft),
                CropMessage::Key(Key::Equal),
                CropMessage::Focus(false),
            ]
        );
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse_script("focus\ndown 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));

        assert!(parse_script("key Enter").is_err());
        assert!(parse_script("up now").is_err());
        assert!(parse_script("move 1 two").is_err());
        assert!(parse_script("jump 1 2").is_err());
        assert!(parse_script("down 1 2 3 4").is_err());
    }
}
