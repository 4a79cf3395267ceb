use super::run_with_dump;
use crate::error::CliError;
use crate::util::{create_dump_dir, print_summary};
use argh::FromArgs;
use floodsquare::{decrypt_with_observer, FloodSquareSettings, Salt};
use std::{fs, path::PathBuf, time::Instant};

#[derive(FromArgs, Debug)]
/// Decrypt a file produced by `encrypt`
#[argh(subcommand, name = "decrypt")]
pub struct DecryptCmd {
    /// file to decrypt
    #[argh(option)]
    pub input: PathBuf,

    /// where to write the recovered plaintext
    #[argh(option)]
    pub output: PathBuf,

    /// hex key the file was encrypted with
    #[argh(option)]
    pub key: String,

    /// the file was encrypted with --salt
    #[argh(switch)]
    pub salt: bool,

    /// accept grids whose padding was modified
    #[argh(switch)]
    pub skip_padding_check: bool,

    /// directory to write a PBM bitmap of every transform pass into
    #[argh(option, from_str_fn(create_dump_dir))]
    pub dump: Option<PathBuf>,
}

pub fn handle_decrypt_command(cmd: DecryptCmd) -> Result<(), CliError> {
    let mut settings = FloodSquareSettings::default().with_verify_padding(!cmd.skip_padding_check);
    if cmd.salt {
        settings = settings.with_salt(Salt::DEFAULT);
    }

    let ciphertext = fs::read(&cmd.input)?;
    let start = Instant::now();
    let plaintext = run_with_dump(cmd.dump, "decrypt", |observer| {
        decrypt_with_observer(&ciphertext, &cmd.key, settings, observer)
    })?;
    let elapsed = start.elapsed();

    fs::write(&cmd.output, &plaintext)?;
    print_summary("Decrypt", ciphertext.len(), plaintext.len(), elapsed);
    Ok(())
}
