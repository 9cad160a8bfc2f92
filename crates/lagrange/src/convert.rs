use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};

use bls12_381::{G1Projective, G2Projective};
use serialization::{Decoder, Encoder};

use crate::{CeremonyGroup, Error, LagrangeContext, PairingGroup};

/// Buffer size used for reading and writing ceremony files.
const IO_BUFFER_SIZE: usize = 1 << 20;

/// Number of points converted to affine form at a time while encoding.
///
/// Bounds the extra memory needed on top of the working buffer.
const NORMALIZE_BATCH_SIZE: usize = 1 << 16;

impl LagrangeContext {
    /// Converts `count` points stored at `start_offset` in `file` and appends the
    /// result to the end of the file.
    ///
    /// The points at `start_offset` and everything before them are left as they
    /// were. If decoding fails nothing is appended.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip_all,
            fields(group = %G::GROUP, start_offset = start_offset, count = count)
        )
    )]
    pub fn convert_file<G: CeremonyGroup, F: Read + Write + Seek>(
        &self,
        file: &mut F,
        start_offset: u64,
        count: usize,
    ) -> Result<(), Error> {
        self.check_count(count)?;

        file.seek(SeekFrom::Start(start_offset))?;
        let reader = BufReader::with_capacity(IO_BUFFER_SIZE, &mut *file);
        let mut points = decode_points::<G, _>(reader, count)?;

        self.lagrangify(&mut points)?;

        file.seek(SeekFrom::End(0))?;
        encode_points(BufWriter::with_capacity(IO_BUFFER_SIZE, file), &points)
    }

    /// Reads `count` points from `reader`, converts them and writes the result to `writer`.
    ///
    /// `reader` is read exactly up to the last point, so it is not buffered here;
    /// wrap it in a `BufReader` if every read is a system call. `writer` is
    /// buffered and flushed before returning.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(group = %G::GROUP, count = count))
    )]
    pub fn convert_stream<G: CeremonyGroup, R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
        count: usize,
    ) -> Result<(), Error> {
        self.check_count(count)?;

        let mut points = decode_points::<G, _>(reader, count)?;
        self.lagrangify(&mut points)?;
        encode_points(BufWriter::with_capacity(IO_BUFFER_SIZE, writer), &points)
    }

    /// [`LagrangeContext::convert_file`] for a group chosen at runtime.
    pub fn convert_file_for<F: Read + Write + Seek>(
        &self,
        group: PairingGroup,
        file: &mut F,
        start_offset: u64,
        count: usize,
    ) -> Result<(), Error> {
        match group {
            PairingGroup::G1 => self.convert_file::<G1Projective, F>(file, start_offset, count),
            PairingGroup::G2 => self.convert_file::<G2Projective, F>(file, start_offset, count),
        }
    }

    /// [`LagrangeContext::convert_stream`] for a group chosen at runtime.
    pub fn convert_stream_for<R: Read, W: Write>(
        &self,
        group: PairingGroup,
        reader: R,
        writer: W,
        count: usize,
    ) -> Result<(), Error> {
        match group {
            PairingGroup::G1 => self.convert_stream::<G1Projective, R, W>(reader, writer, count),
            PairingGroup::G2 => self.convert_stream::<G2Projective, R, W>(reader, writer, count),
        }
    }
}

fn decode_points<G: CeremonyGroup, R: Read>(reader: R, count: usize) -> Result<Vec<G>, Error> {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("decode points", count).entered();

    let mut decoder = Decoder::new(reader);
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let point: G::Affine = decoder.decode()?;
        points.push(G::from_affine(&point));
    }
    Ok(points)
}

fn encode_points<G: CeremonyGroup, W: Write>(writer: W, points: &[G]) -> Result<(), Error> {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("encode points", count = points.len()).entered();

    let mut encoder = Encoder::new(writer);
    for batch in points.chunks(NORMALIZE_BATCH_SIZE) {
        encoder.encode_all(&G::batch_to_affine(batch))?;
    }
    encoder.flush()?;
    Ok(())
}
