//! Pure parsers for the packaged palette resources.
//!
//! Both formats are line-oriented CSV. Parsing is conservative: the first
//! malformed field fails the whole resource with a line-numbered error, so a
//! resource is either loaded completely or not at all.

use crate::error::{PaletteError, Result};
use crate::model::{Color, Palette, Preset};

/// Parse the preset resource.
///
/// Row format (first row is a header and is discarded):
/// `name,dark,hueMin,hueMax,chromaMin,chromaMax,lightnessMin,lightnessMax`
pub fn parse_presets(content: &str) -> Result<Vec<Preset>> {
    let mut presets = Vec::new();

    // Line numbers are 1-based and count the header.
    for (line_no, line) in content.lines().enumerate().skip(1) {
        let line_no = line_no + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 8 {
            return Err(PaletteError::ParseError {
                line: line_no,
                message: format!("expected 8 fields, got {}", fields.len()),
            });
        }

        presets.push(Preset {
            name: fields[0].to_string(),
            dark: parse_bool(fields[1], line_no)?,
            hue_min: parse_num::<i32>(fields[2], line_no)?,
            hue_max: parse_num::<i32>(fields[3], line_no)?,
            chroma_min: parse_num::<f32>(fields[4], line_no)?,
            chroma_max: parse_num::<f32>(fields[5], line_no)?,
            lightness_min: parse_num::<f32>(fields[6], line_no)?,
            lightness_max: parse_num::<f32>(fields[7], line_no)?,
        });
    }

    Ok(presets)
}

/// Parse the default-palette resource.
///
/// Each row is a comma-separated list of hex color tokens (`#RRGGBB`, the
/// hash is optional). Empty tokens are skipped; a row with no colors
/// produces no palette.
pub fn parse_palettes(content: &str) -> Result<Vec<Palette>> {
    let mut palettes = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line_no = line_no + 1;
        let mut colors = Vec::new();

        for token in line.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let color = Color::from_hex(token).map_err(|_| PaletteError::ParseError {
                line: line_no,
                message: format!("invalid hex color '{}'", token),
            })?;
            colors.push(color);
        }

        if !colors.is_empty() {
            palettes.push(Palette::new(colors));
        }
    }

    Ok(palettes)
}

fn parse_bool(value: &str, line: usize) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(PaletteError::ParseError {
            line,
            message: format!("invalid boolean '{}'", value),
        })
    }
}

fn parse_num<T: std::str::FromStr>(value: &str, line: usize) -> Result<T> {
    value.parse().map_err(|_| PaletteError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PRESET_HEADER: &str =
        "name,dark,hueMin,hueMax,chromaMin,chromaMax,lightnessMin,lightnessMax";

    // ==================== parse_presets tests ====================

    #[test]
    fn test_parse_presets_single_row() {
        let content = format!("{}\nPastel,false,0,360,0.2,0.5,0.7,1.0", PRESET_HEADER);
        let presets = parse_presets(&content).unwrap();
        assert_eq!(presets.len(), 1);
        let p = &presets[0];
        assert_eq!(p.name, "Pastel");
        assert!(!p.dark);
        assert_eq!(p.hue_min, 0);
        assert_eq!(p.hue_max, 360);
        assert_eq!(p.chroma_min, 0.2);
        assert_eq!(p.chroma_max, 0.5);
        assert_eq!(p.lightness_min, 0.7);
        assert_eq!(p.lightness_max, 1.0);
    }

    #[test]
    fn test_parse_presets_header_is_discarded() {
        let presets = parse_presets(PRESET_HEADER).unwrap();
        assert!(presets.is_empty());
    }

    #[test]
    fn test_parse_presets_wrap_around_hue_arc() {
        let content = format!("{}\nWarm,false,330,30,0.4,1.0,0.5,1.0", PRESET_HEADER);
        let presets = parse_presets(&content).unwrap();
        assert!(presets[0].hue_wraps());
    }

    #[test]
    fn test_parse_presets_malformed_number_fails_with_line() {
        let content = format!(
            "{}\nGood,false,0,360,0.2,0.5,0.7,1.0\nBad,false,zero,360,0.2,0.5,0.7,1.0",
            PRESET_HEADER
        );
        let err = parse_presets(&content).unwrap_err();
        match err {
            PaletteError::InvalidNumber { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "zero");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_presets_malformed_boolean_fails() {
        let content = format!("{}\nBad,maybe,0,360,0.2,0.5,0.7,1.0", PRESET_HEADER);
        assert!(parse_presets(&content).is_err());
    }

    #[test]
    fn test_parse_presets_wrong_field_count_fails() {
        let content = format!("{}\nTooFew,false,0,360", PRESET_HEADER);
        assert!(parse_presets(&content).is_err());
    }

    #[test]
    fn test_parse_presets_numeric_round_trip() {
        let content = format!("{}\nExact,true,15,345,0.25,0.875,0.125,0.75", PRESET_HEADER);
        let p = &parse_presets(&content).unwrap()[0];
        let serialized = format!(
            "{},{},{},{},{},{},{},{}",
            p.name,
            p.dark,
            p.hue_min,
            p.hue_max,
            p.chroma_min,
            p.chroma_max,
            p.lightness_min,
            p.lightness_max
        );
        assert_eq!(serialized, "Exact,true,15,345,0.25,0.875,0.125,0.75");
    }

    // ==================== parse_palettes tests ====================

    #[test]
    fn test_parse_palettes_basic() {
        let palettes = parse_palettes("#1B9E77,#D95F02,#7570B3\n#E41A1C,#377EB8").unwrap();
        assert_eq!(palettes.len(), 2);
        assert_eq!(palettes[0].size(), 3);
        assert_eq!(palettes[1].size(), 2);
    }

    #[test]
    fn test_parse_palettes_hash_optional() {
        let palettes = parse_palettes("1B9E77,D95F02").unwrap();
        assert_eq!(
            palettes[0].colors()[0],
            Color::from_hex("#1B9E77").unwrap()
        );
    }

    #[test]
    fn test_parse_palettes_skips_empty_tokens() {
        let palettes = parse_palettes("#1B9E77,,#D95F02,  ,#7570B3").unwrap();
        assert_eq!(palettes[0].size(), 3);
    }

    #[test]
    fn test_parse_palettes_empty_rows_produce_no_palette() {
        let palettes = parse_palettes("\n,,,\n#1B9E77\n").unwrap();
        assert_eq!(palettes.len(), 1);
    }

    #[test]
    fn test_parse_palettes_bad_token_fails_whole_resource() {
        let err = parse_palettes("#1B9E77\n#NOTHEX").unwrap_err();
        match err {
            PaletteError::ParseError { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
