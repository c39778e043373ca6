use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::encoder::{encode, encode_all, Scheme};
use crate::error::EncodeError;
use crate::waveform::Waveform;

/// Vertical spacing between stacked tracks in an all-schemes dump, wide
/// enough that ±1 V tracks never overlap on a shared grid.
pub const TRACK_GAP: f32 = 3.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub label: String,
    pub waveform: Waveform,
}

/// All the data a downstream chart needs: the annotated bit string plus one
/// (times, levels) track per scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDump {
    pub bits: String,
    pub tracks: Vec<Track>,
}

/// Dump a single scheme as one track at its natural voltage levels.
pub fn scheme_dump(scheme: Scheme, bits: &str) -> Result<ChartDump, EncodeError> {
    let waveform = encode(scheme, bits)?;
    Ok(ChartDump {
        bits: bits.to_string(),
        tracks: vec![Track {
            label: scheme.label().to_string(),
            waveform,
        }],
    })
}

/// Dump every scheme stacked on one grid, first scheme on the top track.
pub fn chart_dump(bits: &str) -> Result<ChartDump, EncodeError> {
    let encoded = encode_all(bits)?;
    let count = encoded.len();
    let tracks = encoded
        .into_iter()
        .enumerate()
        .map(|(i, (scheme, mut waveform))| {
            waveform.offset_levels(TRACK_GAP * (count - 1 - i) as f32);
            Track {
                label: scheme.label().to_string(),
                waveform,
            }
        })
        .collect();
    Ok(ChartDump {
        bits: bits.to_string(),
        tracks,
    })
}

pub fn write_chart_json(path: &str, dump: &ChartDump) -> Result<()> {
    let data = serde_json::to_string_pretty(dump)?;
    fs::write(Path::new(path), data)?;
    Ok(())
}
