use reconcile_engine::{Candidates, EngineError, Signature, select_method};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    ListAll,
    ListByProject,
    GetById,
}

// ── select_method ────────────────────────────────────────────────

#[test]
fn last_eligible_wins() {
    let candidates = vec![vec![], vec![true], vec![true, true]];
    assert_eq!(select_method(&candidates), Some(2));
}

#[test]
fn skips_ineligible_specific_candidate() {
    let candidates = vec![vec![], vec![true], vec![true, false]];
    assert_eq!(select_method(&candidates), Some(1));
}

#[test]
fn none_when_every_candidate_misses_a_predicate() {
    let candidates = vec![vec![false], vec![true, false], vec![false, false]];
    assert_eq!(select_method(&candidates), None);
}

#[test]
fn empty_input_selects_nothing() {
    let candidates: Vec<Vec<bool>> = vec![];
    assert_eq!(select_method(&candidates), None);
}

#[test]
fn empty_predicate_list_is_eligible() {
    let candidates = vec![vec![false], vec![]];
    assert_eq!(select_method(&candidates), Some(1));
}

#[test]
fn misordered_candidates_still_pick_last() {
    // Callers must order general → specific; the selector does not reorder.
    let candidates = vec![vec![true, true], vec![]];
    assert_eq!(select_method(&candidates), Some(1));
}

#[test]
fn repeated_calls_are_deterministic() {
    let candidates = vec![vec![true], vec![false], vec![true]];
    let first = select_method(&candidates);
    for _ in 0..10 {
        assert_eq!(select_method(&candidates), first);
    }
}

// ── Signature ────────────────────────────────────────────────────

#[test]
fn signature_builder_tracks_predicates() {
    let sig = Signature::new().requires(true).requires(false);
    assert_eq!(sig.predicates(), &[true, false]);
    assert!(!sig.is_eligible());
    assert!(Signature::new().is_eligible());
}

#[test]
fn signature_from_vec() {
    let sig = Signature::from(vec![true, true]);
    assert!(sig.is_eligible());
}

// ── Candidates ───────────────────────────────────────────────────

fn candidates(project: Option<&str>, id: Option<&str>) -> Candidates<Method> {
    Candidates::new()
        .candidate(Method::ListAll, Signature::new())
        .candidate(Method::ListByProject, Signature::new().requires(project.is_some()))
        .candidate(
            Method::GetById,
            Signature::new()
                .requires(project.is_some())
                .requires(id.is_some()),
        )
}

#[test]
fn picks_get_by_id_when_all_identifiers_present() {
    let c = candidates(Some("p"), Some("i"));
    assert_eq!(*c.select().unwrap(), Method::GetById);
}

#[test]
fn picks_filtered_list_when_id_missing() {
    let c = candidates(Some("p"), None);
    assert_eq!(*c.select().unwrap(), Method::ListByProject);
}

#[test]
fn falls_back_to_list_all() {
    let c = candidates(None, Some("i"));
    assert_eq!(*c.select().unwrap(), Method::ListAll);
}

#[test]
fn no_eligible_method_is_an_error() {
    let c: Candidates<Method> = Candidates::new()
        .candidate(Method::GetById, Signature::new().requires(false));
    let err = c.select().unwrap_err();
    assert!(matches!(err, EngineError::NoEligibleMethod { candidates: 1 }));
    assert!(err.to_string().contains("missing required identifying input"));
}

#[test]
fn empty_candidates() {
    let c: Candidates<Method> = Candidates::default();
    assert!(c.is_empty());
    assert_eq!(c.len(), 0);
    assert!(c.select().is_err());
}
