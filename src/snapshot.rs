//! Snapshot export
//!
//! Writes the captured 3D view as `MyBeautyGarden_YYYYMMDDhhmmss.png`.
//! Screen captures come back bottom-up (GL order) and are flipped here.
//! The stamp is local wall-clock time. Export is native only: the web build
//! has neither a filesystem nor a working system clock.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use chrono::{DateTime, Local, TimeZone};
#[cfg(not(target_arch = "wasm32"))]
use image::RgbaImage;

pub const FILE_PREFIX: &str = "MyBeautyGarden_";

#[derive(Debug)]
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub enum SnapshotError {
    IoError(std::io::Error),
    EncodeError(image::ImageError),
    /// Pixel buffer does not match the given dimensions
    BadBuffer { width: u32, height: u32, len: usize },
    /// Web build: no filesystem to write to
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    Unsupported,
}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        SnapshotError::IoError(e)
    }
}

impl From<image::ImageError> for SnapshotError {
    fn from(e: image::ImageError) -> Self {
        SnapshotError::EncodeError(e)
    }
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::IoError(e) => write!(f, "IO error: {}", e),
            SnapshotError::EncodeError(e) => write!(f, "Encode error: {}", e),
            SnapshotError::BadBuffer { width, height, len } => {
                write!(f, "pixel buffer of {} bytes does not fit {}x{}", len, width, height)
            }
            SnapshotError::Unsupported => write!(f, "Snapshots are not available on the web build"),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// `MyBeautyGarden_YYYYMMDDhhmmss.png`, stamped in `at`'s own time zone
#[cfg(not(target_arch = "wasm32"))]
pub fn snapshot_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}.png", FILE_PREFIX, at.format("%Y%m%d%H%M%S"))
}

/// File name for a snapshot taken now, in local time
#[cfg(not(target_arch = "wasm32"))]
pub fn local_file_name() -> String {
    snapshot_file_name(&Local::now())
}

/// Configured directory, else the pictures directory, else the working directory
#[cfg(not(target_arch = "wasm32"))]
pub fn snapshot_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }
    dirs::picture_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Build an upright image from a bottom-up RGBA capture
#[cfg(not(target_arch = "wasm32"))]
pub fn image_from_capture(width: u32, height: u32, bottom_up_rgba: Vec<u8>) -> Result<RgbaImage, SnapshotError> {
    let len = bottom_up_rgba.len();
    let img = RgbaImage::from_raw(width, height, bottom_up_rgba)
        .ok_or(SnapshotError::BadBuffer { width, height, len })?;
    Ok(image::imageops::flip_vertical(&img))
}

/// Encode `img` as PNG into `dir/file_name`, returning the written path
#[cfg(not(target_arch = "wasm32"))]
pub fn save_snapshot(img: &RgbaImage, dir: &Path, file_name: &str) -> Result<PathBuf, SnapshotError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    img.save_with_format(&path, image::ImageFormat::Png)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_file_name_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(snapshot_file_name(&at), "MyBeautyGarden_20250307090501.png");
    }

    #[test]
    fn test_file_name_uses_wall_clock_of_zone() {
        // 2024-02-29 12:45:07 UTC is 21:45:07 in UTC+9
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 2, 29, 12, 45, 7).unwrap().with_timezone(&tokyo);
        assert_eq!(snapshot_file_name(&at), "MyBeautyGarden_20240229214507.png");
    }

    #[test]
    fn test_local_file_name_matches_local_clock() {
        let before = Local::now();
        let name = local_file_name();
        let after = Local::now();
        let candidates = [snapshot_file_name(&before), snapshot_file_name(&after)];
        assert!(candidates.contains(&name), "{} not in {:?}", name, candidates);
    }

    #[test]
    fn test_configured_dir_wins() {
        assert_eq!(snapshot_dir(Some(Path::new("/tmp/x"))), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_capture_is_flipped() {
        // 1x2: bottom row red, top row blue (bottom-up order)
        let raw = vec![255, 0, 0, 255, 0, 0, 255, 255];
        let img = image_from_capture(1, 2, raw).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_bad_buffer() {
        assert!(matches!(image_from_capture(4, 4, vec![0; 3]), Err(SnapshotError::BadBuffer { .. })));
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(3, 2, image::Rgba([10, 200, 30, 255]));
        let name = snapshot_file_name(&Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
        let path = save_snapshot(&img, &dir.path().join("shots"), &name).unwrap();
        assert!(path.ends_with("MyBeautyGarden_19700101000000.png"));

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(2, 1).0, [10, 200, 30, 255]);
    }
}
