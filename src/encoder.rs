use std::fmt;
use std::str::FromStr;

use crate::error::EncodeError;
use crate::waveform::Waveform;

/// Line-encoding schemes, one encoder function per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    UnipolarNrz,
    NrzL,
    NrzI,
    Rz,
    Manchester,
    DifferentialManchester,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::UnipolarNrz,
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::Rz,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scheme::UnipolarNrz => "Unipolar NRZ",
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::Rz => "RZ",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::UnipolarNrz => "unipolar",
            Scheme::NrzL => "nrz-l",
            Scheme::NrzI => "nrz-i",
            Scheme::Rz => "rz",
            Scheme::Manchester => "manchester",
            Scheme::DifferentialManchester => "diff-manchester",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unipolar" | "unipolar-nrz" => Ok(Scheme::UnipolarNrz),
            "nrz-l" | "nrzl" => Ok(Scheme::NrzL),
            "nrz-i" | "nrzi" => Ok(Scheme::NrzI),
            "rz" => Ok(Scheme::Rz),
            "manchester" => Ok(Scheme::Manchester),
            "diff-manchester" | "differential-manchester" => {
                Ok(Scheme::DifferentialManchester)
            }
            other => Err(format!("unknown scheme: {}", other)),
        }
    }
}

/// Encode `bits` with the selected scheme. Every symbol must be '0' or '1';
/// an empty input yields an empty waveform.
pub fn encode(scheme: Scheme, bits: &str) -> Result<Waveform, EncodeError> {
    match scheme {
        Scheme::UnipolarNrz => unipolar_nrz(bits),
        Scheme::NrzL => nrz_l(bits),
        Scheme::NrzI => nrz_i(bits),
        Scheme::Rz => rz(bits),
        Scheme::Manchester => manchester(bits),
        Scheme::DifferentialManchester => differential_manchester(bits),
    }
}

/// Encode `bits` with every scheme, in `Scheme::ALL` order.
pub fn encode_all(bits: &str) -> Result<Vec<(Scheme, Waveform)>, EncodeError> {
    let mut out = Vec::with_capacity(Scheme::ALL.len());
    for scheme in Scheme::ALL {
        out.push((scheme, encode(scheme, bits)?));
    }
    Ok(out)
}

fn bit_value(index: usize, symbol: char) -> Result<bool, EncodeError> {
    match symbol {
        '0' => Ok(false),
        '1' => Ok(true),
        _ => Err(EncodeError::InvalidSymbol { index, symbol }),
    }
}

/// Unipolar NRZ: 1 V for '1', 0 V for '0', held across the whole bit period.
pub fn unipolar_nrz(bits: &str) -> Result<Waveform, EncodeError> {
    let mut wave = Waveform::with_capacity(bits.len() * 2);
    for (i, symbol) in bits.chars().enumerate() {
        let level = if bit_value(i, symbol)? { 1.0 } else { 0.0 };
        wave.push_segment(i as f32, (i + 1) as f32, level);
    }
    Ok(wave)
}

/// NRZ-L (polar): −1 V for '1', +1 V for '0', held across the whole bit
/// period. This is the textbook polarity where a '1' is the low level.
pub fn nrz_l(bits: &str) -> Result<Waveform, EncodeError> {
    let mut wave = Waveform::with_capacity(bits.len() * 2);
    for (i, symbol) in bits.chars().enumerate() {
        let level = if bit_value(i, symbol)? { -1.0 } else { 1.0 };
        wave.push_segment(i as f32, (i + 1) as f32, level);
    }
    Ok(wave)
}

/// NRZ-I: the level inverts at the start of a bit period for '1' and holds
/// for '0'. The running level starts at +1 V and lives only for this call.
pub fn nrz_i(bits: &str) -> Result<Waveform, EncodeError> {
    let mut wave = Waveform::with_capacity(bits.len() * 2);
    let mut current_level = 1.0f32;
    for (i, symbol) in bits.chars().enumerate() {
        if bit_value(i, symbol)? {
            current_level = -current_level;
        }
        wave.push_segment(i as f32, (i + 1) as f32, current_level);
    }
    Ok(wave)
}

/// RZ: the first half of the bit period carries the value (+1 V for '1',
/// −1 V for '0'), the second half always returns to 0 V.
pub fn rz(bits: &str) -> Result<Waveform, EncodeError> {
    let mut wave = Waveform::with_capacity(bits.len() * 4);
    for (i, symbol) in bits.chars().enumerate() {
        let first = if bit_value(i, symbol)? { 1.0 } else { -1.0 };
        let start = i as f32;
        wave.push_segment(start, start + 0.5, first);
        wave.push_segment(start + 0.5, start + 1.0, 0.0);
    }
    Ok(wave)
}

/// Manchester: '1' is low-then-high (−1 V then +1 V), '0' is high-then-low.
/// Every bit period has exactly one mid-bit transition, which is what makes
/// the scheme self-clocking.
pub fn manchester(bits: &str) -> Result<Waveform, EncodeError> {
    let mut wave = Waveform::with_capacity(bits.len() * 4);
    for (i, symbol) in bits.chars().enumerate() {
        let (first, second) = if bit_value(i, symbol)? {
            (-1.0, 1.0)
        } else {
            (1.0, -1.0)
        };
        let start = i as f32;
        wave.push_segment(start, start + 0.5, first);
        wave.push_segment(start + 0.5, start + 1.0, second);
    }
    Ok(wave)
}

/// Differential Manchester: the level inverts at the start of a bit period
/// iff the bit is '0', and always inverts again at mid-bit. The running level
/// starts at +1 V and lives only for this call.
pub fn differential_manchester(bits: &str) -> Result<Waveform, EncodeError> {
    let mut wave = Waveform::with_capacity(bits.len() * 4);
    let mut current_level = 1.0f32;
    for (i, symbol) in bits.chars().enumerate() {
        if !bit_value(i, symbol)? {
            current_level = -current_level;
        }
        let start = i as f32;
        wave.push_segment(start, start + 0.5, current_level);
        current_level = -current_level;
        wave.push_segment(start + 0.5, start + 1.0, current_level);
    }
    Ok(wave)
}
