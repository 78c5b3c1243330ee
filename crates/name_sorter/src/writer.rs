use ::std::borrow::Borrow;
use ::std::fs::File;
use ::std::io::{self, BufWriter, Write};
use ::std::path::Path;

use ::log::debug;

use crate::error::NameSorterError;
use crate::name::Name;

/// Writes one rendered name per line to `sink`, in the order given.
pub fn render_names<N, W>(names: &[N], sink: &mut W) -> io::Result<()>
where
    N: Borrow<Name>,
    W: Write,
{
    for name in names {
        let name: &Name = name.borrow();
        writeln!(sink, "{name}")?;
    }
    Ok(())
}

/// Writes `names` to the file at `path`, replacing anything already there.
pub fn write_names<N, P>(names: &[N], path: P) -> Result<(), NameSorterError>
where
    N: Borrow<Name>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("Writing {} names to {path:?}", names.len());

    let wrap = |source: io::Error| NameSorterError::Write { path: path.to_path_buf(), source };

    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    render_names(names, &mut writer).map_err(wrap)?;
    writer.flush().map_err(wrap)
}
