use super::run_with_dump;
use crate::error::CliError;
use crate::util::{create_dump_dir, print_summary};
use argh::FromArgs;
use floodsquare::{encrypt_with_observer, FloodSquareSettings, Salt};
use std::{fs, path::PathBuf, time::Instant};

#[derive(FromArgs, Debug)]
/// Encrypt a file with a hex key
#[argh(subcommand, name = "encrypt")]
pub struct EncryptCmd {
    /// file to encrypt
    #[argh(option)]
    pub input: PathBuf,

    /// where to write the ciphertext
    #[argh(option)]
    pub output: PathBuf,

    /// hex key, e.g. e1f020c9
    #[argh(option)]
    pub key: String,

    /// whiten the data with the default salt before encrypting
    #[argh(switch)]
    pub salt: bool,

    /// directory to write a PBM bitmap of every transform pass into
    #[argh(option, from_str_fn(create_dump_dir))]
    pub dump: Option<PathBuf>,
}

pub fn handle_encrypt_command(cmd: EncryptCmd) -> Result<(), CliError> {
    let mut settings = FloodSquareSettings::default();
    if cmd.salt {
        settings = settings.with_salt(Salt::DEFAULT);
    }

    let plaintext = fs::read(&cmd.input)?;
    let start = Instant::now();
    let ciphertext = run_with_dump(cmd.dump, "encrypt", |observer| {
        encrypt_with_observer(&plaintext, &cmd.key, settings, observer)
    })?;
    let elapsed = start.elapsed();

    fs::write(&cmd.output, &ciphertext)?;
    print_summary("Encrypt", plaintext.len(), ciphertext.len(), elapsed);
    Ok(())
}
