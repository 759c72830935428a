use crate::configuration::Format;
use crate::error::Error;
use octasphere::{Vertex, VertexBuffer};
use std::io::{self, prelude::*};
use std::path::Path;

/// Writes the vertex buffer exactly as it would be uploaded to the GPU.
pub fn write_vertex_buffer<W: Write>(mut w: W, vertices: &[Vertex]) -> io::Result<()> {
    w.write_all(vertices.as_bytes())
}

/// Writes the triangle soup as an OBJ object. Every vertex carries its color
/// after the position; faces reference consecutive vertex triples.
pub fn write_obj<W: Write>(mut w: W, name: &str, vertices: &[Vertex]) -> io::Result<()> {
    for v in vertices.iter() {
        let [x, y, z] = v.position;
        let [r, g, b] = v.color;
        writeln!(w, "v {} {} {} {} {} {}", x, y, z, r, g, b)?;
    }

    writeln!(w, "o {}", name)?;
    for t in 0..vertices.len() / 3 {
        let i = 3 * t + 1;
        writeln!(w, "f {} {} {}", i, i + 1, i + 2)?;
    }

    Ok(())
}

pub fn write_file(path: &Path, format: Format, vertices: &[Vertex]) -> Result<(), Error> {
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut w = io::BufWriter::new(std::fs::File::create(path).map_err(to_error)?);

    match format {
        Format::Bin => write_vertex_buffer(&mut w, vertices),
        Format::Obj => {
            let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("globe");
            write_obj(&mut w, name, vertices)
        }
    }
    .and_then(|()| w.flush())
    .map_err(to_error)
}
