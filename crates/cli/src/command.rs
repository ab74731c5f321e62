/// One line of shell input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Draw,
    /// 1-based hand position.
    Play(usize),
    Place(usize),
    State,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next().ok_or_else(|| "empty command".to_string())?;
    let args: Vec<&str> = parts.collect();
    match cmd.to_ascii_lowercase().as_str() {
        "draw" | "d" => no_args(cmd, &args, Command::Draw),
        "play" | "p" => parse_position(&args).map(Command::Play),
        "place" | "c" => parse_position(&args).map(Command::Place),
        "state" | "s" => no_args(cmd, &args, Command::State),
        "help" | "h" | "?" => no_args(cmd, &args, Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}', type 'help'")),
    }
}

fn no_args(cmd: &str, args: &[&str], command: Command) -> Result<Command, String> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(format!("'{cmd}' takes no arguments"))
    }
}

fn parse_position(args: &[&str]) -> Result<usize, String> {
    let [arg] = args else {
        return Err("expected one hand position".to_string());
    };
    match arg.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("'{arg}' is not a hand position")),
        Ok(value) => Ok(value),
    }
}

pub const HELP: &str = "\
Commands:
  draw|d          draw a card from the stock (then place one)
  play|p <n>      play hand card n onto a matching row card
  place|c <n>     place hand card n in the row after drawing
  state|s         show the table
  help|h|?        show this help
  quit|exit|q     leave the game";
