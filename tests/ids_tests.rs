use studybot::interactions::ids::{cell_id, parse_cell_id};

#[test]
fn cell_id_round_trip() {
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(parse_cell_id(&cell_id(x, y)), Some((x, y)));
        }
    }
}

#[test]
fn parse_cell_bad() {
    assert!(parse_cell_id("ttt_cell_").is_none());
    assert!(parse_cell_id("ttt_cell_0").is_none());
    assert!(parse_cell_id("ttt_cell_0_x").is_none());
    assert!(parse_cell_id("ttt_cell_3_0").is_none());
    assert!(parse_cell_id("ttt_cell_0_3").is_none());
    assert!(parse_cell_id("guess_submit").is_none());
}
