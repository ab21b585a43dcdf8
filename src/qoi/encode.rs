//! QOI opcode stream encoder.
//!
//! Holds the running array, the previous pixel and the pending run, and
//! picks one record per pixel in fixed priority order: run, index, diff,
//! luma, rgb, rgba.

use alloc::vec::Vec;

use super::delta::within_wrapped_range;
use super::{
    END_MARKER, MAX_RUN, OP_DIFF, OP_INDEX, OP_LUMA, OP_RGB, OP_RGBA, OP_RUN, START_PIXEL,
};
use crate::pixel::Pixel;

/// One encoded record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    /// Running-array slot, 0..64.
    Index(u8),
    /// Per-channel deltas, each in -2..=1.
    Diff { dr: i8, dg: i8, db: i8 },
    /// Green delta in -32..=31; red and blue relative to it, each in -8..=7.
    Luma { dg: i8, dr_dg: i8, db_dg: i8 },
    Rgb { r: u8, g: u8, b: u8 },
    Rgba(Pixel),
    /// Run length, 1..=62.
    Run(u8),
}

impl Op {
    fn write_to(self, out: &mut Vec<u8>) {
        match self {
            Op::Index(slot) => out.push(OP_INDEX | (slot & 0x3f)),
            Op::Diff { dr, dg, db } => {
                let dr = (dr + 2) as u8 & 0x03;
                let dg = (dg + 2) as u8 & 0x03;
                let db = (db + 2) as u8 & 0x03;
                out.push(OP_DIFF | (dr << 4) | (dg << 2) | db);
            }
            Op::Luma { dg, dr_dg, db_dg } => {
                let dg = (dg + 32) as u8 & 0x3f;
                let dr_dg = (dr_dg + 8) as u8 & 0x0f;
                let db_dg = (db_dg + 8) as u8 & 0x0f;
                out.push(OP_LUMA | dg);
                out.push((dr_dg << 4) | db_dg);
            }
            Op::Rgb { r, g, b } => out.extend_from_slice(&[OP_RGB, r, g, b]),
            Op::Rgba(p) => out.extend_from_slice(&[OP_RGBA, p.r, p.g, p.b, p.a]),
            Op::Run(n) => {
                debug_assert!((1..=MAX_RUN).contains(&n));
                out.push(OP_RUN | ((n - 1) & 0x3f));
            }
        }
    }
}

/// Stateful pixel-to-opcode encoder writing into a caller-reserved buffer.
pub(crate) struct QoiEncoder {
    out: Vec<u8>,
    index: [Pixel; 64],
    prev: Pixel,
    run: u8,
}

impl QoiEncoder {
    /// Start encoding after whatever `out` already holds (the header).
    pub(crate) fn new(out: Vec<u8>) -> Self {
        Self {
            out,
            index: [Pixel::default(); 64],
            prev: START_PIXEL,
            run: 0,
        }
    }

    /// Encode the next pixel in row-major order.
    pub(crate) fn push(&mut self, px: Pixel) {
        if px == self.prev {
            if self.run == MAX_RUN {
                self.flush_run();
            }
            self.run += 1;
            return;
        }
        self.flush_run();

        let op = self.select(px);
        op.write_to(&mut self.out);
        self.prev = px;
        self.index[px.qoi_hash()] = px;
    }

    /// Flush the pending run, append the end marker and hand back the buffer.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        self.flush_run();
        self.out.extend_from_slice(&END_MARKER);
        self.out
    }

    fn flush_run(&mut self) {
        if self.run > 0 {
            Op::Run(self.run).write_to(&mut self.out);
            self.run = 0;
        }
    }

    /// Pick the cheapest record for a pixel that does not continue a run.
    pub(crate) fn select(&self, px: Pixel) -> Op {
        let slot = px.qoi_hash();
        if self.index[slot] == px {
            return Op::Index(slot as u8);
        }
        if px.a != self.prev.a {
            return Op::Rgba(px);
        }
        self.diff(px)
            .or_else(|| self.luma(px))
            .unwrap_or(Op::Rgb {
                r: px.r,
                g: px.g,
                b: px.b,
            })
    }

    fn diff(&self, px: Pixel) -> Option<Op> {
        let prev = self.prev;
        let dr = within_wrapped_range(prev.r.into(), px.r, -2, 1)?;
        let dg = within_wrapped_range(prev.g.into(), px.g, -2, 1)?;
        let db = within_wrapped_range(prev.b.into(), px.b, -2, 1)?;
        Some(Op::Diff { dr, dg, db })
    }

    fn luma(&self, px: Pixel) -> Option<Op> {
        let prev = self.prev;
        let dg = within_wrapped_range(prev.g.into(), px.g, -32, 31)?;
        let dr_dg = within_wrapped_range(i16::from(prev.r) + i16::from(dg), px.r, -8, 7)?;
        let db_dg = within_wrapped_range(i16::from(prev.b) + i16::from(dg), px.b, -8, 7)?;
        Some(Op::Luma { dg, dr_dg, db_dg })
    }
}
