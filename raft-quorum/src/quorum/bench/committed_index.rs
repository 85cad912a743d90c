extern crate test;

use std::collections::BTreeMap;

use maplit::btreemap;
use maplit::btreeset;
use test::black_box;
use test::Bencher;

use crate::quorum::JointConfig;
use crate::quorum::MajorityConfig;
use crate::raft_types::LogIndex;
use crate::raft_types::NodeId;

#[bench]
fn committed_index_3(b: &mut Bencher) {
    let config = MajorityConfig::from(btreeset! {1, 2, 3});
    let acks: BTreeMap<NodeId, LogIndex> = btreemap! {1 => 12, 2 => 5};
    b.iter(|| config.committed_index(black_box(&acks)))
}

#[bench]
fn committed_index_5(b: &mut Bencher) {
    let config = MajorityConfig::from(btreeset! {1, 2, 3, 4, 5});
    let acks: BTreeMap<NodeId, LogIndex> = btreemap! {1 => 101, 2 => 102, 3 => 103, 4 => 103};
    b.iter(|| config.committed_index(black_box(&acks)))
}

#[bench]
fn committed_index_joint_3_3(b: &mut Bencher) {
    let config = JointConfig::new(
        MajorityConfig::from(btreeset! {1, 2, 3}),
        MajorityConfig::from(btreeset! {3, 4, 5}),
    );
    let acks: BTreeMap<NodeId, LogIndex> = btreemap! {1 => 12, 2 => 5, 3 => 6, 4 => 7};
    b.iter(|| config.committed_index(black_box(&acks)))
}

#[bench]
fn vote_result_5(b: &mut Bencher) {
    let config = MajorityConfig::from(btreeset! {1, 2, 3, 4, 5});
    let votes = btreemap! {1 => true, 2 => true, 3 => false};
    b.iter(|| config.vote_result(black_box(&votes)))
}
