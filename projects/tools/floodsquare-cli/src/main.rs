mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Encrypt and decrypt files with the FloodSquare cipher
struct TopLevel {
    /// log every cipher call and transform pass to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Encrypt(commands::encrypt::EncryptCmd),
    Decrypt(commands::decrypt::DecryptCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    util::init_logging(cli.verbose);

    match cli.command {
        Commands::Encrypt(cmd) => {
            commands::encrypt::handle_encrypt_command(cmd)?;
        }
        Commands::Decrypt(cmd) => {
            commands::decrypt::handle_decrypt_command(cmd)?;
        }
    }

    Ok(())
}
