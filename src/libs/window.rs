use crate::libs::error::ScanError;

/// A fixed-width slice of a normalized sequence.
///
/// `start..end` is half-open, 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub seq: Vec<u8>,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    pub fn seq_str(&self) -> String {
        String::from_utf8_lossy(&self.seq).into_owned()
    }
}

/// Number of windows produced for a sequence of length `len`.
pub fn window_count(len: usize, width: usize, stride: usize) -> usize {
    if width == 0 || stride == 0 || len < width {
        0
    } else {
        (len - width) / stride + 1
    }
}

/// Slides a `width`-wide window over `seq`, advancing by `stride`.
///
/// Only full windows are produced; a trailing remainder shorter than
/// `width` is dropped.
///
/// ```
/// use dnatopo::libs::window::segment;
/// let windows = segment(b"ACGTACGTAC", 4, 3).unwrap();
/// assert_eq!(windows.len(), 3);
/// assert_eq!(windows[2].start, 6);
/// assert_eq!(windows[2].seq, b"GTAC".to_vec());
///
/// assert!(segment(b"ACG", 4, 1).is_err());
/// ```
pub fn segment(seq: &[u8], width: usize, stride: usize) -> Result<Vec<Window>, ScanError> {
    if width == 0 {
        return Err(ScanError::InvalidParameter(
            "window width must be positive".to_string(),
        ));
    }
    if stride == 0 {
        return Err(ScanError::InvalidParameter(
            "stride must be positive".to_string(),
        ));
    }
    if seq.len() < width {
        return Err(ScanError::TooShort {
            len: seq.len(),
            width,
        });
    }

    let windows = (0..=seq.len() - width)
        .step_by(stride)
        .map(|start| Window {
            index: start / stride,
            start,
            end: start + width,
            seq: seq[start..start + width].to_vec(),
        })
        .collect();

    Ok(windows)
}
