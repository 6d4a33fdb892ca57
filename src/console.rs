use crate::options;
use crossterm::{cursor, queue, terminal};
use sparselife::Frame;
use std::io::{self, BufRead, Write};

const STEP_PROMPT: &str = "Step(Continue) (T/F/Q)? ";

/// What to do after a frame in step mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChoice {
    /// Advance one generation and ask again
    Continue,
    /// Stop asking and run the remaining generations
    Run,
    /// Stop the simulation
    Quit,
}

/// Draws frames onto a terminal-like writer, one full screen per frame
pub struct Screen<W: Write> {
    out: W,
}
impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clears the screen and prints the frame line by line
    pub fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for line in frame.lines() {
            self.out.write_all(line.as_bytes())?;
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }

    /// Asks whether to keep stepping, re-asking until the answer is understood
    ///
    /// End of input counts as [`StepChoice::Run`].
    pub fn prompt_step<R: BufRead>(&mut self, input: &mut R) -> io::Result<StepChoice> {
        let mut answer = String::new();
        loop {
            self.out.write_all(STEP_PROMPT.as_bytes())?;
            self.out.flush()?;

            answer.clear();
            if input.read_line(&mut answer)? == 0 {
                writeln!(self.out)?;
                return Ok(StepChoice::Run);
            }

            let token = answer.trim();
            if token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit") {
                return Ok(StepChoice::Quit);
            }
            match options::parse_flag(token) {
                Some(true) => return Ok(StepChoice::Continue),
                Some(false) => return Ok(StepChoice::Run),
                None => writeln!(self.out, "Invalid choice. Pick T/F/Q")?,
            }
        }
    }

    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out, "End")?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparselife::{GameOfLife, Pos2, Style};

    fn prompt(input: &str) -> (StepChoice, String) {
        let mut screen = Screen::new(Vec::new());
        let choice = screen
            .prompt_step(&mut input.as_bytes())
            .expect("prompt to a vec");
        let written = String::from_utf8(screen.into_inner()).expect("utf8 output");
        (choice, written)
    }

    #[test]
    fn draw_clears_then_prints_every_line() {
        let game = GameOfLife::from_alive(vec![Pos2::new(1, 0)]);
        let mut screen = Screen::new(Vec::new());

        screen.draw(&game.frame(Style::default())).expect("draw to a vec");

        let written = String::from_utf8(screen.into_inner()).expect("utf8 output");
        assert_eq!(written, "\x1b[2J\x1b[1;1H \u{25A0} \n   \n");
    }

    #[test]
    fn prompt_answers() {
        assert_eq!(prompt("t\n").0, StepChoice::Continue);
        assert_eq!(prompt("F\n").0, StepChoice::Run);
        assert_eq!(prompt("q\n").0, StepChoice::Quit);
        assert_eq!(prompt("QUIT\n").0, StepChoice::Quit);
    }

    #[test]
    fn prompt_repeats_on_invalid_answers() {
        let (choice, written) = prompt("what\n\nyes\n");

        assert_eq!(choice, StepChoice::Continue);
        assert_eq!(written.matches(STEP_PROMPT).count(), 3);
        assert_eq!(written.matches("Invalid choice").count(), 2);
    }

    #[test]
    fn end_of_input_stops_stepping() {
        assert_eq!(prompt("").0, StepChoice::Run);
    }
}
