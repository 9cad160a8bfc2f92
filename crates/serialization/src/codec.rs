use std::io::{Read, Write};

use crate::{Error, PointEncoding};

/// Reads compressed points one after the other from `reader`.
///
/// The decoder never seeks; callers position the reader before handing it over.
#[derive(Debug)]
pub struct Decoder<R> {
    reader: R,
    scratch: Vec<u8>,
}

impl<R: Read> Decoder<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            scratch: Vec::new(),
        }
    }

    /// Decodes the next point.
    pub fn decode<P: PointEncoding>(&mut self) -> Result<P, Error> {
        self.scratch.resize(P::COMPRESSED_SIZE, 0);
        self.reader.read_exact(&mut self.scratch)?;
        P::from_compressed_slice(&self.scratch)
    }

    /// Decodes exactly `count` points, stopping at the first failure.
    pub fn decode_many<P: PointEncoding>(&mut self, count: usize) -> Result<Vec<P>, Error> {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(self.decode()?);
        }
        Ok(points)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Writes compressed points one after the other to `writer`.
#[derive(Debug)]
pub struct Encoder<W: Write> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn encode<P: PointEncoding>(&mut self, point: &P) -> Result<(), Error> {
        point.write_compressed(&mut self.writer)?;
        Ok(())
    }

    pub fn encode_all<P: PointEncoding>(&mut self, points: &[P]) -> Result<(), Error> {
        for point in points {
            self.encode(point)?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    ///
    /// Buffered writers swallow errors on drop, so this must be called before
    /// the encoder goes away.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
