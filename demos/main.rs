/*
 *   Copyright (c) 2025 Edin Omeragic
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::io::{Result, Write};

use vtansi::{BackgroundColor, Console, Style, TextColor};

const TEXT_COLORS: [TextColor; 8] = [
    TextColor::Black,
    TextColor::Red,
    TextColor::Green,
    TextColor::Yellow,
    TextColor::Blue,
    TextColor::Magenta,
    TextColor::Cyan,
    TextColor::White,
];

const BACKGROUND_COLORS: [BackgroundColor; 8] = [
    BackgroundColor::Black,
    BackgroundColor::Red,
    BackgroundColor::Green,
    BackgroundColor::Yellow,
    BackgroundColor::Blue,
    BackgroundColor::Magenta,
    BackgroundColor::Cyan,
    BackgroundColor::White,
];

fn main() -> Result<()> {
    let mut console = Console::new(std::io::stdout());

    // Every basic fg/bg pairing, padded to a fixed field.
    for fg in TEXT_COLORS {
        for bg in BACKGROUND_COLORS {
            write!(
                console,
                "{} ",
                Style::new("[Style]").fg(fg).bg(bg).width(10)
            )?;
        }
        writeln!(console)?;
    }

    write!(console, "{}", Style::new("------------------------\n"))?;
    writeln!(console, "{}", Style::new("A").width(20).left())?;
    writeln!(console, "{}", Style::new("A").width(20).center())?;
    writeln!(console, "{}", Style::new("A").width(20).right())?;

    // Same grid, bold and unpadded.
    for fg in TEXT_COLORS {
        for bg in BACKGROUND_COLORS {
            write!(
                console,
                "{} ",
                Style::new(" [Style] ").fg(fg).bg(bg).bold()
            )?;
        }
        writeln!(console)?;
    }

    // Truecolor layered over a basic color; the truecolor escape comes later
    // in the sequence, so it is the one the terminal honors.
    writeln!(
        console,
        "{}",
        Style::new("truecolor wins")
            .red()
            .fg_rgb_color((255, 128, 0))
            .bg_rgb_color((40, 40, 40))
    )?;

    console.notice("[Notice] Hey this is notice")?;
    console.warning("[Warning] Hey this is warning")?;
    console.error("[Error] Hey this is error")?;
    console.success("[OK] Hey this is success")?;

    // Nested output: every line break after enter_level() is reindented.
    writeln!(console, "build")?;
    console.enter_level();
    writeln!(console, "compile")?;
    console.enter_level();
    writeln!(console, "link")?;
    console.reset_level();
    writeln!(console, "done")?;

    // Builders are reusable; only the payload changes between writes.
    let one = Style::new("").bg_blue().white().bold();
    let two = Style::new("").bg_white().red().width(30).center();

    write!(console, "{}", one.clone().text("Style one"))?;
    write!(console, "{}", two.text("Style two"))?;
    write!(console, "{}", one.text("Again style one"))?;
    writeln!(console)?;

    Ok(())
}
