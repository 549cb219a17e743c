//! Interactive menu: reads choices line by line and prints results.
//!
//! Input and output are generic so the loop can be driven from tests.

use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use super::session::Session;

const MENU: &str = "
Choose an option:
1. Query bridge words
2. Generate new text with bridge words
3. Shortest path between two words
4. Random walk
5. Exit
Enter option (1-5): ";

/// Run the menu until the user picks exit or the input ends.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> io::Result<()> {
    info!("interactive session started");
    let mut lines = input.lines();

    loop {
        write!(output, "{}", MENU)?;
        output.flush()?;

        let Some(choice) = lines.next().transpose()? else {
            break;
        };
        let choice = choice.trim().to_string();
        debug!(choice = %choice, "menu choice");

        match choice.as_str() {
            "1" => {
                let Some(word1) = prompt(&mut lines, &mut output, "word1: ")? else { break };
                let Some(word2) = prompt(&mut lines, &mut output, "word2: ")? else { break };
                writeln!(output, "{}", session.bridge(&word1, &word2))?;
            }
            "2" => {
                let Some(text) = prompt(&mut lines, &mut output, "New text: ")? else { break };
                writeln!(output, "{}", session.generate(&text))?;
            }
            "3" => {
                let Some(from) = prompt(&mut lines, &mut output, "word1: ")? else { break };
                let Some(to) = prompt(&mut lines, &mut output, "word2: ")? else { break };
                let response = session.shortest_path(&from, &to);
                writeln!(output, "{}", response)?;
            }
            "4" => {
                let response = session.walk();
                writeln!(output, "{}", response)?;
                if response.walk().is_some() {
                    writeln!(output, "Walk written to {}", session.config.walk_output.display())?;
                }
            }
            "5" => {
                writeln!(output, "Bye.")?;
                break;
            }
            "" => continue,
            other => writeln!(output, "Invalid option '{}', please choose 1-5.", other)?,
        }
    }

    info!("interactive session ended");
    Ok(())
}

fn prompt<I, W>(lines: &mut I, output: &mut W, label: &str) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(output, "{}", label)?;
    output.flush()?;
    Ok(lines.next().transpose()?.map(|line| line.trim().to_string()))
}
