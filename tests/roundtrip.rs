use codepoints::{
    codepoint_at, combine_surrogates, encode_codepoint, is_surrogate, MAX_CODE_POINT,
    REPLACEMENT_CHARACTER,
};

#[test]
fn encode_then_decode_reproduces_scalars() {
    // Plane boundaries plus a coarse sweep; exhausting the space buys
    // nothing over hitting every branch edge.
    let boundaries = [
        0,
        1,
        0x41,
        0xD7FF,
        0xE000,
        0xFFFD,
        0xFFFF,
        0x10000,
        0x1F600,
        0x10FFFE,
        MAX_CODE_POINT,
    ];
    for &value in &boundaries {
        let units = encode_codepoint(value);
        assert_eq!(codepoint_at(units.as_slice(), 0), value, "0x{:X}", value);
    }
    for value in (0..=MAX_CODE_POINT).step_by(251) {
        if is_surrogate(value) {
            continue;
        }
        let units = encode_codepoint(value);
        assert_eq!(codepoint_at(units.as_slice(), 0), value, "0x{:X}", value);
    }
}

#[test]
fn pair_arithmetic_spans_exactly_the_supplementary_planes() {
    assert_eq!(combine_surrogates(0xD800, 0xDC00), 0x10000);
    assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), MAX_CODE_POINT);
    for leading in (0xD800..0xDC00).step_by(0x55) {
        for trailing in (0xDC00..0xE000).step_by(0x55) {
            let combined = combine_surrogates(leading, trailing);
            assert!((0x10000..=MAX_CODE_POINT).contains(&combined));
            assert_eq!(encode_codepoint(combined).as_slice(), [leading as u16, trailing as u16]);
        }
    }
}

#[test]
fn unencodable_values_take_the_substitution_path() {
    for value in [0xD800, 0xDBFF, 0xDC00, 0xDFFF, MAX_CODE_POINT + 1, i32::MAX, -1, i32::MIN] {
        let units = encode_codepoint(value);
        assert_eq!(units.as_slice(), [0xFFFD], "0x{:X}", value);
        assert_eq!(units.to_codepoint(), REPLACEMENT_CHARACTER);
    }
}

#[test]
fn decoding_ignores_the_unit_after_a_bmp_scalar() {
    for trailing in [0x0, 0x41, 0xD800, 0xDC00, 0xFFFF] {
        assert_eq!(combine_surrogates(0x41, trailing), 0x41);
        assert_eq!(combine_surrogates(0xFFFD, trailing), 0xFFFD);
    }
}
