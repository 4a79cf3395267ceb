pub mod decrypt;
pub mod encrypt;

use crate::error::CliError;
use crate::util::BitmapDumper;
use floodsquare::{FloodSquareError, GridView, TransformObserver, TransformStep};
use std::path::PathBuf;

/// Runs one cipher call, dumping every pass into `dump` when a directory is given.
///
/// Cipher errors take precedence over dump errors.
pub(crate) fn run_with_dump<F>(
    dump: Option<PathBuf>,
    prefix: &'static str,
    run: F,
) -> Result<Vec<u8>, CliError>
where
    F: FnOnce(&mut dyn TransformObserver) -> Result<Vec<u8>, FloodSquareError>,
{
    match dump {
        Some(dir) => {
            let mut dumper = BitmapDumper::new(dir, prefix);
            let output = run(&mut dumper)?;
            let written = dumper.finish()?;
            println!("Wrote {written} bitmaps");
            Ok(output)
        }
        None => Ok(run(&mut |_: TransformStep, _: GridView<'_>| {})?),
    }
}
