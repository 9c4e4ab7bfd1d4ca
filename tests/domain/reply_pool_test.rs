use cisec_nexus::domain::{PATIENT_REPLIES, ReplyPool, ReplyPoolError};

#[test]
fn given_reference_pool_when_built_then_contains_six_replies_in_order() {
    let pool = ReplyPool::patient_maria();

    assert_eq!(pool.len(), 6);
    for (i, reply) in PATIENT_REPLIES.iter().enumerate() {
        assert_eq!(pool.get(i), Some(*reply));
    }
}

#[test]
fn given_empty_vec_when_building_pool_then_returns_empty_error() {
    assert_eq!(ReplyPool::new(Vec::new()), Err(ReplyPoolError::Empty));
}

#[test]
fn given_blank_reply_when_building_pool_then_reports_index() {
    let result = ReplyPool::new(vec!["ok".to_string(), "  ".to_string()]);
    assert_eq!(result, Err(ReplyPoolError::BlankReply(1)));
}

#[test]
fn given_index_past_end_when_picking_then_wraps_around() {
    let pool = ReplyPool::new(vec!["a".to_string(), "b".to_string()]).unwrap();
    assert_eq!(pool.pick(0), "a");
    assert_eq!(pool.pick(3), "b");
}

#[test]
fn given_pool_when_checking_membership_then_matches_exact_text_only() {
    let pool = ReplyPool::patient_maria();
    assert!(pool.contains(PATIENT_REPLIES[2]));
    assert!(!pool.contains("respuesta inventada"));
}
