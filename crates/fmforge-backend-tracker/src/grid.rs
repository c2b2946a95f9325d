//! The fixed-capacity pattern grid the pipeline writes into.
//!
//! A grid is rows x columns {note, instrument, volume, effect, effect_param},
//! every cell an i16. The empty sentinel is -1 for all columns; notes occupy
//! 0..=179 with 180 reserved for note-off. All accessors are total: reads
//! outside the grid return the empty sentinel and writes outside it are
//! silently dropped, so the pipeline never has to special-case its row
//! arithmetic.

/// Maximum rows a grid may hold.
pub const MAX_ROWS: usize = 256;

/// Empty-cell sentinel for every column.
pub const CELL_EMPTY: i16 = -1;

/// Highest valid note value.
pub const NOTE_MAX: i16 = 179;

/// Reserved note value meaning note-off.
pub const NOTE_OFF: i16 = 180;

/// Lowest generated velocity.
pub const VOLUME_MIN: i16 = 0x10;

/// Highest generated velocity.
pub const VOLUME_MAX: i16 = 0x7F;

/// Effect commands the generator emits.
pub mod effects {
    /// Pitch slide down (bass accent dives).
    pub const PORTA_DOWN: i16 = 0x02;
    /// Tone portamento (slides into large intervals).
    pub const TONE_PORTA: i16 = 0x03;
    /// Vibrato, parameter packs speed << 4 | depth.
    pub const VIBRATO: i16 = 0x04;
    /// Volume slide (guitar chug fade).
    pub const VOL_SLIDE: i16 = 0x0A;
}

/// One row of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub note: i16,
    pub instrument: i16,
    pub volume: i16,
    pub effect: i16,
    pub effect_param: i16,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            note: CELL_EMPTY,
            instrument: CELL_EMPTY,
            volume: CELL_EMPTY,
            effect: CELL_EMPTY,
            effect_param: CELL_EMPTY,
        }
    }
}

/// A bounded region of tracker rows for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    rows: Vec<GridCell>,
}

impl PatternGrid {
    /// Create an empty grid. Row counts beyond [`MAX_ROWS`] are truncated.
    pub fn new(rows: usize) -> Self {
        Self {
            rows: vec![GridCell::default(); rows.min(MAX_ROWS)],
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn index(&self, row: i32) -> Option<usize> {
        if row < 0 {
            return None;
        }
        let row = row as usize;
        (row < self.rows.len()).then_some(row)
    }

    /// Cell at a row, if the row exists.
    pub fn cell(&self, row: i32) -> Option<&GridCell> {
        self.index(row).map(|i| &self.rows[i])
    }

    /// Note column at a row; [`CELL_EMPTY`] outside the grid.
    pub fn note(&self, row: i32) -> i16 {
        self.cell(row).map_or(CELL_EMPTY, |c| c.note)
    }

    /// Whether a row holds a real (pitched) note, not a sentinel.
    pub fn is_note(&self, row: i32) -> bool {
        let n = self.note(row);
        (0..=NOTE_MAX).contains(&n)
    }

    /// Whether a row holds any note event (pitched or note-off).
    pub fn has_event(&self, row: i32) -> bool {
        self.note(row) != CELL_EMPTY
    }

    /// Write note, instrument, and volume columns. Out-of-grid rows are
    /// dropped.
    pub fn set_note(&mut self, row: i32, note: i16, instrument: i16, volume: i16) {
        if let Some(i) = self.index(row) {
            self.rows[i].note = note;
            self.rows[i].instrument = instrument;
            self.rows[i].volume = volume;
        }
    }

    /// Write a note-off into the note column only.
    pub fn set_note_off(&mut self, row: i32) {
        if let Some(i) = self.index(row) {
            self.rows[i].note = NOTE_OFF;
        }
    }

    /// Write the effect columns.
    pub fn set_effect(&mut self, row: i32, effect: i16, param: i16) {
        if let Some(i) = self.index(row) {
            self.rows[i].effect = effect;
            self.rows[i].effect_param = param;
        }
    }

    /// BLAKE3 hash of all cell data in row order. Two grids with identical
    /// contents hash identically, which is how determinism tests compare
    /// whole regions.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for cell in &self.rows {
            for v in [
                cell.note,
                cell.instrument,
                cell.volume,
                cell.effect,
                cell.effect_param,
            ] {
                hasher.update(&v.to_le_bytes());
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = PatternGrid::new(64);
        assert_eq!(grid.row_count(), 64);
        for row in 0..64 {
            assert_eq!(grid.note(row), CELL_EMPTY);
            assert!(!grid.has_event(row));
        }
    }

    #[test]
    fn test_row_capacity_is_bounded() {
        let grid = PatternGrid::new(10_000);
        assert_eq!(grid.row_count(), MAX_ROWS);
    }

    #[test]
    fn test_out_of_grid_reads_and_writes() {
        let mut grid = PatternGrid::new(16);
        grid.set_note(-1, 60, 0, 0x40);
        grid.set_note(16, 60, 0, 0x40);
        assert_eq!(grid.note(-1), CELL_EMPTY);
        assert_eq!(grid.note(16), CELL_EMPTY);
        assert_eq!(grid.content_hash(), PatternGrid::new(16).content_hash());
    }

    #[test]
    fn test_note_off_is_event_but_not_note() {
        let mut grid = PatternGrid::new(16);
        grid.set_note_off(3);
        assert!(grid.has_event(3));
        assert!(!grid.is_note(3));
    }

    #[test]
    fn test_content_hash_tracks_cells() {
        let mut a = PatternGrid::new(32);
        let mut b = PatternGrid::new(32);
        assert_eq!(a.content_hash(), b.content_hash());
        a.set_note(5, 105, 0, 0x60);
        assert_ne!(a.content_hash(), b.content_hash());
        b.set_note(5, 105, 0, 0x60);
        assert_eq!(a.content_hash(), b.content_hash());
    }
}
