#![allow(missing_docs)]
//! Host-level tests for saving and loading the strip state.

use std::error::Error;
use std::fs;

use blinkt::state_file::{self, format_text, parse_text};
use blinkt::strip::Strip;
use smart_leds::RGB8;

const DEFAULT_TEXT: &str = "left\non\noff\noff\n255\n\
7 0 0 0\n7 0 0 0\n7 0 0 0\n7 0 0 0\n7 0 0 0\n7 0 0 0\n7 0 0 0\n7 0 0 0\n";

fn sample_strip() -> Strip {
    let mut strip = Strip::new();
    strip.flags.left_to_right = false;
    strip.flags.holding = true;
    strip.flags.binary_on = true;
    strip.flags.binary_mask = 0b1010_0101;
    strip.pixels[0].brightness = 31;
    strip.pixels[0].color = RGB8::new(255, 8, 0);
    strip.pixels[7].brightness = 0;
    strip.pixels[7].color = RGB8::new(1, 2, 3);
    strip
}

#[test]
fn default_strip_formats_as_expected() {
    assert_eq!(format_text(&Strip::new()), DEFAULT_TEXT);
}

#[test]
fn pixel_fields_are_brightness_blue_green_red() {
    let text = format_text(&sample_strip());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[..5], ["right", "on", "on", "on", "165"]);
    assert_eq!(lines[5], "31 0 8 255");
    assert_eq!(lines[12], "0 3 2 1");
    assert_eq!(lines.len(), 13);
}

#[test]
fn parse_reverses_format() -> Result<(), Box<dyn Error>> {
    let strip = sample_strip();

    assert_eq!(parse_text(&format_text(&strip))?, strip);
    Ok(())
}

#[test]
fn save_then_load_round_trips_byte_for_byte() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("blinkt");
    let written = format_text(&sample_strip());
    fs::write(&path, &written)?;

    let mut strip = Strip::new();
    state_file::load_into(&path, &mut strip);
    state_file::save(&path, &strip)?;

    assert_eq!(fs::read_to_string(&path)?, written);
    Ok(())
}

#[test]
fn missing_file_leaves_strip_untouched() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent");
    let mut strip = sample_strip();

    assert_eq!(state_file::read(&path)?, None);
    state_file::load_into(&path, &mut strip);

    assert_eq!(strip, sample_strip());
    Ok(())
}

#[test]
fn truncated_file_loads_as_defaults() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("blinkt");
    let text = format_text(&sample_strip());
    fs::write(&path, &text[..text.len() - 6])?;

    let mut strip = sample_strip();
    state_file::load_into(&path, &mut strip);

    assert_eq!(strip, Strip::new());
    Ok(())
}

#[test]
fn corrupt_values_are_rejected() {
    let garbage = DEFAULT_TEXT.replacen("7 0 0 0", "7 zero 0 0", 1);
    let too_big = DEFAULT_TEXT.replacen("255", "256", 1);
    let negative = DEFAULT_TEXT.replacen("7 0 0 0", "-7 0 0 0", 1);

    for text in ["", "left\non\n", garbage.as_str(), too_big.as_str(), negative.as_str()] {
        assert!(parse_text(text).is_err(), "{text:?}");
    }
}

#[test]
fn unknown_flag_words_read_as_false() -> Result<(), Box<dyn Error>> {
    let text = DEFAULT_TEXT.replacen("left\non\n", "LEFT\nyes\n", 1);

    let strip = parse_text(&text)?;

    assert!(!strip.flags.left_to_right);
    assert!(!strip.flags.leds_on);
    Ok(())
}

#[test]
fn trailing_content_is_ignored() -> Result<(), Box<dyn Error>> {
    let text = format!("{DEFAULT_TEXT}extra words 99\n");

    assert_eq!(parse_text(&text)?, Strip::new());
    Ok(())
}

#[test]
fn unwritable_path_is_an_error() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing-dir").join("blinkt");

    let err = state_file::save(&path, &Strip::new())
        .err()
        .ok_or("save should fail")?;

    assert!(err.to_string().starts_with("Unable to open"), "{err}");
    Ok(())
}
