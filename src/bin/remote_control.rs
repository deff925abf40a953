// Command demo: an interactive remote control driving a light and a fan.
//
// The dispatch table itself lives in the library; this binary is only the
// interactive loop around it, generic over its input and output streams so
// the loop can be exercised with in-memory buffers.

use colored::Colorize;
use design_patterns::dispatch::{Fan, FanOff, FanOn, Light, LightOff, LightOn, RemoteControl};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

const MENU: &str = "Press a button on the remote:\n  1. Turn light on\n  2. Turn light off\n  3. Turn fan on\n  4. Turn fan off";

fn build_remote() -> RemoteControl {
    let light = Rc::new(Light::new());
    let fan = Rc::new(Fan::new());

    let mut remote = RemoteControl::new();
    remote.register("1", Box::new(LightOn::new(Rc::clone(&light))));
    remote.register("2", Box::new(LightOff::new(Rc::clone(&light))));
    remote.register("3", Box::new(FanOn::new(Rc::clone(&fan))));
    remote.register("4", Box::new(FanOff::new(fan)));
    remote
}

/// One prompt/press/continue round per iteration. Stops on end of input or
/// when the continuation answer is `n`; any other answer keeps going.
fn run_loop<R: BufRead, W: Write>(
    remote: &RemoteControl,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(output, "{MENU}")?;
        write!(output, "Button: ")?;
        output.flush()?;

        let mut token = String::new();
        if input.read_line(&mut token)? == 0 {
            return Ok(());
        }

        writeln!(output, "{}", remote.press(token.trim()))?;

        write!(output, "\nContinue? (y/n): ")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(());
        }
        if answer.trim().eq_ignore_ascii_case("n") {
            return Ok(());
        }
        writeln!(output)?;
    }
}

fn main() -> io::Result<()> {
    println!("{}\n", "Remote control".bold());

    let remote = build_remote();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&remote, &mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let remote = build_remote();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_loop(&remote, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn bound_and_unbound_presses_in_one_session() {
        let output = run_script("1\ny\n9\nn\n");
        assert!(output.contains("light is on"));
        assert!(output.contains("No command assigned"));
    }

    #[test]
    fn session_stops_on_n_answer() {
        let output = run_script("1\nn\n");
        // One press, one continuation prompt, then done.
        assert_eq!(output.matches("Button:").count(), 1);
    }

    #[test]
    fn anything_but_n_keeps_the_session_going() {
        let output = run_script("1\ny\n2\nwhatever\n3\nn\n");
        assert_eq!(output.matches("Button:").count(), 3);
        assert!(output.contains("light is off"));
        assert!(output.contains("fan is on"));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let output = run_script("1\n");
        assert!(output.contains("light is on"));
        assert_eq!(output.matches("Button:").count(), 1);
    }
}
