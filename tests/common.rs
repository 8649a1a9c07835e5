#![allow(dead_code)]

use image::{GrayImage, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// A colourful image with enough detail that JPEG quality visibly matters.
pub fn create_detailed_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        let noise = (x.wrapping_mul(7919) ^ y.wrapping_mul(104_729)).wrapping_mul(2_654_435_761);
        Rgb([
            ((x * 255) / width.max(1)) as u8 ^ (noise >> 24) as u8,
            ((y * 255) / height.max(1)) as u8,
            (noise >> 16) as u8,
        ])
    })
    .save(&path)
    .unwrap();
    path
}

pub fn create_gray_image(dir: &Path, name: &str, width: u32, height: u32, values: Vec<u8>) -> PathBuf {
    let path = dir.join(name);
    GrayImage::from_raw(width, height, values)
        .unwrap()
        .save(&path)
        .unwrap();
    path
}

pub fn write_threshold_config(dir: &Path, value: &str) -> PathBuf {
    let path = dir.join("value.ini");
    fs::write(&path, value).unwrap();
    path
}

pub fn write_fake_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"fake image data").unwrap();
    path
}

pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
