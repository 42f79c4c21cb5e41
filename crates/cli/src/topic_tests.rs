#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn strips_final_suffix_segment() {
    assert_eq!(topic_of("seek_02"), "seek");
    assert_eq!(topic_of("open_creat_07"), "open_creat");
    assert_eq!(topic_of("open_exist_rw_12"), "open_exist_rw");
}

#[test]
fn name_without_separator_is_its_own_topic() {
    assert_eq!(topic_of("fsync"), "fsync");
}

#[test]
fn only_the_last_segment_is_stripped() {
    assert_eq!(topic_of("a_b_c"), "a_b");
}
