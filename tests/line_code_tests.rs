use line_code_encoder::encoder::{encode, encode_all, Scheme};
use line_code_encoder::export::{chart_dump, TRACK_GAP};
use line_code_encoder::wav_writer::render_samples;
use line_code_encoder::{EncodeError, Waveform};

/// Count the sign changes inside one bit period, sampling each half period.
fn mid_bit_transitions(wave: &Waveform, bit: usize) -> usize {
    let first = wave.level_at(bit as f32 + 0.25).unwrap();
    let second = wave.level_at(bit as f32 + 0.75).unwrap();
    usize::from(first != second)
}

#[test]
fn all_schemes_agree_on_length_and_span() {
    let bits = "0100110";
    for (scheme, wave) in encode_all(bits).unwrap() {
        assert_eq!(wave.times.len(), wave.levels.len(), "{}", scheme);
        assert_eq!(wave.span(), bits.len() as f32, "{}", scheme);
    }
}

#[test]
fn manchester_is_self_clocking() {
    let bits = "111000101";
    let wave = encode(Scheme::Manchester, bits).unwrap();
    for bit in 0..bits.len() {
        assert_eq!(mid_bit_transitions(&wave, bit), 1, "bit {}", bit);
    }
}

#[test]
fn differential_manchester_is_self_clocking() {
    let bits = "111000101";
    let wave = encode(Scheme::DifferentialManchester, bits).unwrap();
    for bit in 0..bits.len() {
        assert_eq!(mid_bit_transitions(&wave, bit), 1, "bit {}", bit);
    }
}

#[test]
fn full_bit_schemes_hold_one_level_per_bit() {
    for scheme in [Scheme::UnipolarNrz, Scheme::NrzL, Scheme::NrzI] {
        let wave = encode(scheme, "0110").unwrap();
        for bit in 0..4 {
            assert_eq!(mid_bit_transitions(&wave, bit), 0, "{} bit {}", scheme, bit);
        }
    }
}

#[test]
fn long_zero_run_keeps_nrz_i_flat_but_not_manchester() {
    let bits = "0000000000";
    let nrz_i = encode(Scheme::NrzI, bits).unwrap();
    assert!(nrz_i.levels.iter().all(|&l| l == 1.0));

    let manchester = encode(Scheme::Manchester, bits).unwrap();
    for bit in 0..bits.len() {
        assert_eq!(mid_bit_transitions(&manchester, bit), 1);
    }
}

#[test]
fn invalid_symbol_reports_first_offender() {
    for scheme in Scheme::ALL {
        let err = encode(scheme, "0102010").unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidSymbol { index: 3, symbol: '2' },
            "{}",
            scheme
        );
    }
}

#[test]
fn chart_dump_tracks_never_overlap() {
    let dump = chart_dump("1011001011").unwrap();
    for pair in dump.tracks.windows(2) {
        let upper_min = pair[0]
            .waveform
            .levels
            .iter()
            .cloned()
            .fold(f32::INFINITY, f32::min);
        let lower_max = pair[1]
            .waveform
            .levels
            .iter()
            .cloned()
            .fold(f32::NEG_INFINITY, f32::max);
        assert!(upper_min > lower_max, "{} overlaps {}", pair[0].label, pair[1].label);
        assert!(upper_min - lower_max <= TRACK_GAP);
    }
}

#[test]
fn rendered_rz_returns_to_zero_each_bit() {
    let wave = encode(Scheme::Rz, "110").unwrap();
    let samples = render_samples(&wave, 4);
    assert_eq!(
        samples,
        vec![1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0]
    );
}
