//! Concrete pools with known outcomes.

use mockpair::engine::{run_rng, EngineConfig};
use mockpair::{compute_daily_pairing, compute_daily_pairing_with, is_compatible, Error};

use crate::fixtures::{participant, roster, sorted_ids, Easy, Hard, Medium};

#[test]
fn test_empty_pool_is_an_error() {
    assert!(matches!(compute_daily_pairing(&[]), Err(Error::EmptyPool)));
}

#[test]
fn test_single_participant_is_unpaired() {
    let pool = vec![participant("A", Hard, &[Hard])];
    let partition = compute_daily_pairing(&pool).unwrap();
    assert!(partition.paired.is_empty());
    assert_eq!(sorted_ids(&partition.unpaired), vec!["A"]);
}

#[test]
fn test_hard_only_and_easy_only_do_not_pair() {
    let pool = vec![
        participant("A", Hard, &[Hard]),
        participant("B", Easy, &[Easy]),
    ];
    let partition = compute_daily_pairing(&pool).unwrap();
    assert_eq!(partition.pair_count(), 0);
    assert_eq!(sorted_ids(&partition.unpaired), vec!["A", "B"]);
}

#[test]
fn test_two_mediums_pair() {
    let pool = vec![
        participant("B", Medium, &[Easy, Medium]),
        participant("C", Medium, &[Easy, Medium]),
    ];
    let partition = compute_daily_pairing(&pool).unwrap();
    assert_eq!(partition.pair_count(), 1);
    assert_eq!(sorted_ids(&partition.paired), vec!["B", "C"]);
    assert!(partition.unpaired.is_empty());
}

#[test]
fn test_mixed_pool_pairs_like_with_like() {
    let pool = vec![
        participant("A", Hard, &[Hard]),
        participant("B", Medium, &[Easy, Medium]),
        participant("C", Medium, &[Easy, Medium]),
        participant("D", Hard, &[Hard]),
    ];
    // Repeat: the shuffle changes the starting order every run.
    for _ in 0..25 {
        let partition = compute_daily_pairing(&pool).unwrap();
        assert_eq!(partition.paired.len(), 4);
        assert!(partition.unpaired.is_empty());

        let mut pairs: Vec<Vec<String>> = partition
            .pairs()
            .map(|(a, b)| {
                let mut pair = vec![a.id.to_string(), b.id.to_string()];
                pair.sort();
                pair
            })
            .collect();
        pairs.sort();
        assert_eq!(pairs, vec![vec!["A", "D"], vec!["B", "C"]]);
    }
}

#[test]
fn test_full_roster_pairs_everyone() {
    let pool = roster();
    let partition = compute_daily_pairing(&pool).unwrap();
    assert_eq!(partition.pair_count(), 3);
    assert!(partition.unpaired.is_empty());
}

#[test]
fn test_odd_roster_leaves_one_out() {
    let pool: Vec<_> = roster().into_iter().take(5).collect();
    let config = EngineConfig::default().with_workers(2);
    let partition = compute_daily_pairing_with(&pool, &mut run_rng(Some(3)), &config).unwrap();
    assert_eq!(partition.pair_count(), 2);
    assert_eq!(partition.unpaired.len(), 1);
}

#[test]
fn test_sessions_cover_both_roles() {
    let pool = roster();
    let partition = compute_daily_pairing(&pool).unwrap();
    let sessions = partition.sessions();
    assert_eq!(sessions.len(), partition.paired.len());

    for session in &sessions {
        assert!(is_compatible(session.interviewer, session.interviewee));
        // The reverse session exists too.
        assert!(sessions.iter().any(|s| s.interviewer.id == session.interviewee.id
            && s.interviewee.id == session.interviewer.id));
    }
}
