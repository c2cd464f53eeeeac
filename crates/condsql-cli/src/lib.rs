mod bind;
mod cli;
mod config;
mod convert;

use std::io::Read;

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cmd = cli::parse_args(&args)?;
    match cmd {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Convert(args) => {
            let sql = match &args.sql {
                Some(sql) => sql.clone(),
                None => read_stdin()?,
            };
            println!("{}", convert::run(&args, &sql)?);
            Ok(())
        }
        cli::Command::Bind(args) => {
            println!("{}", bind::run(&args)?);
            Ok(())
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| anyhow::anyhow!("failed to read SQL from stdin: {e}"))?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}
