//! Randomized encode/decode round trips for the shipped categories.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use legacy_config::definition::ConfigCategory;
use legacy_config::kit::{IdentikitDefinition, Part, COLOUR_SLOTS, HEAD_MODEL_SLOTS};
use legacy_config::sequence::{Frame, FrameCollection, SequenceDefinition};
use legacy_config::varp::ParameterVariableDefinition;

fn seeds() -> [u64; 16] {
    [
        0x5eed_c0de,
        0x0000_0001,
        0x0000_00ff,
        0x00c0_ffee,
        0x0123_4567,
        0x89ab_cdef,
        0x1111_2222,
        0x3333_4444,
        0x5555_6666,
        0x7777_8888,
        0x9999_aaaa,
        0xbbbb_cccc,
        0xdddd_eeee,
        0x0f0f_f0f0,
        0x55aa_aa55,
        0xdead_beef,
    ]
}

fn random_frames(rng: &mut Xoshiro256StarStar) -> FrameCollection {
    let count = rng.gen_range(0..6);
    let frames = (0..count)
        .map(|_| Frame {
            primary: rng.gen(),
            // 65535 is the "no secondary" sentinel on the wire.
            secondary: if rng.gen() {
                Some(rng.gen_range(0..65535))
            } else {
                None
            },
            duration: rng.gen(),
        })
        .collect();
    FrameCollection::new(frames)
}

#[test]
fn sequence_roundtrip_matrix() {
    for (i, seed) in seeds().iter().enumerate() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(*seed);
        let mut seq = SequenceDefinition::empty(i as u32);

        if rng.gen() {
            seq.set_frames(random_frames(&mut rng));
        }
        if rng.gen() {
            seq.set_loop_offset(rng.gen_range(0..=65535));
        }
        if rng.gen() {
            let order = (0..rng.gen_range(0..8)).map(|_| rng.gen()).collect();
            seq.set_interleave_order(order);
        }
        if rng.gen() {
            seq.set_stretches(true);
        }
        if rng.gen() {
            seq.set_priority(rng.gen_range(0..=255));
        }
        if rng.gen() {
            seq.set_player_mainhand(rng.gen_range(0..=65535));
        }
        if rng.gen() {
            seq.set_maximum_loops(rng.gen_range(0..=255));
        }
        if rng.gen() {
            seq.set_replay_mode(rng.gen_range(0..=255));
        }

        let bytes = seq.encode().expect("encode must succeed");
        let decoded =
            SequenceDefinition::decode(seq.id(), &bytes).expect("decode must succeed");

        assert_eq!(
            decoded.definition().properties(),
            seq.definition().properties(),
            "value mismatch seed={seed:#x}"
        );
        assert_eq!(
            decoded.encode().expect("re-encode must succeed"),
            bytes,
            "byte mismatch seed={seed:#x}"
        );
    }
}

#[test]
fn identikit_roundtrip_matrix() {
    for (i, seed) in seeds().iter().enumerate() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(*seed);
        let mut kit = IdentikitDefinition::empty(i as u32);

        if rng.gen() {
            kit.set_part(Part::from_id(rng.gen_range(0..14)).unwrap());
        }
        if rng.gen() {
            let models = (0..rng.gen_range(0..6)).map(|_| rng.gen()).collect();
            kit.set_models(models);
        }
        for slot in 0..COLOUR_SLOTS {
            if rng.gen_range(0..4) == 0 {
                kit.set_original_colour(slot, rng.gen_range(0..=65535));
                kit.set_replacement_colour(slot, rng.gen_range(0..=65535));
            }
        }
        for slot in 0..HEAD_MODEL_SLOTS {
            if rng.gen_range(0..4) == 0 {
                kit.set_head_model(slot, rng.gen_range(0..=65535));
            }
        }

        let bytes = kit.encode().expect("encode must succeed");
        let decoded =
            IdentikitDefinition::decode(kit.id(), &bytes).expect("decode must succeed");

        assert_eq!(
            decoded.definition().properties(),
            kit.definition().properties(),
            "value mismatch seed={seed:#x}"
        );
        assert_eq!(
            decoded.encode().expect("re-encode must succeed"),
            bytes,
            "byte mismatch seed={seed:#x}"
        );
    }
}

#[test]
fn varp_roundtrip_matrix() {
    for (i, seed) in seeds().iter().enumerate() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(*seed);
        let mut varp = ParameterVariableDefinition::empty(i as u32);
        varp.set_parameter(rng.gen());

        let bytes = varp.encode().expect("encode must succeed");
        let decoded =
            ParameterVariableDefinition::decode(varp.id(), &bytes).expect("decode must succeed");
        assert_eq!(decoded.parameter(), varp.parameter(), "seed={seed:#x}");
        assert_eq!(decoded.encode().unwrap(), bytes, "seed={seed:#x}");
    }
}

#[test]
fn out_of_order_input_normalizes_to_ascending_opcodes() {
    // priority (5) before loop offset (2): legal input the encoder is free
    // to reorder.
    let shuffled = [0x05, 0x08, 0x02, 0x00, 0x03, 0x00];
    let seq = SequenceDefinition::decode(0, &shuffled).unwrap();
    assert_eq!(seq.priority(), 8);
    assert_eq!(seq.loop_offset(), 3);

    let normalized = seq.encode().unwrap();
    assert_eq!(normalized, [0x02, 0x00, 0x03, 0x05, 0x08, 0x00]);

    // Value-identical to the shuffled original.
    let reparsed = SequenceDefinition::decode(0, &normalized).unwrap();
    assert_eq!(
        reparsed.definition().properties(),
        seq.definition().properties()
    );
}
