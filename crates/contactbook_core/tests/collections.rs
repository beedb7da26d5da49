use contactbook_core::{
    parse_meeting_date, Contact, ContactRepository, InMemoryContactRepository,
    InMemoryMeetingRepository, MeetingRepository, RepoError,
};

#[test]
fn add_assigns_increasing_ids_from_one() {
    let mut repo = InMemoryContactRepository::new();

    let first = repo.add_contact("Ada".into(), "".into()).unwrap();
    let second = repo.add_contact("Alan".into(), "".into()).unwrap();

    assert_eq!((first, second), (1, 2));
}

#[test]
fn add_continues_after_highest_loaded_id() {
    let mut repo = InMemoryContactRepository::from_contacts(vec![
        Contact::new(100, "Legacy", ""),
        Contact::new(7, "Other", ""),
    ])
    .unwrap();

    let id = repo.add_contact("New".into(), "".into()).unwrap();
    assert_eq!(id, 101);
}

#[test]
fn insert_rejects_taken_id() {
    let mut repo = InMemoryContactRepository::new();
    repo.insert_contact(Contact::new(3, "Sam", "")).unwrap();

    let err = repo.insert_contact(Contact::new(3, "Sam", "again")).unwrap_err();
    assert_eq!(err, RepoError::DuplicateContactId(3));
    assert_eq!(repo.list_contacts().len(), 1);
}

#[test]
fn positional_lookup_follows_insertion_order_and_survives_replace() {
    let mut repo = InMemoryContactRepository::new();
    for name in ["c", "a", "b"] {
        repo.add_contact(name.into(), "".into()).unwrap();
    }
    repo.replace_contact(Contact::new(1, "c2", "")).unwrap();

    let names: Vec<_> = (0..3)
        .map(|index| repo.contact_at(index).unwrap().name.clone())
        .collect();
    assert_eq!(names, vec!["c2", "a", "b"]);
    assert!(repo.contact_at(3).is_none());
}

#[test]
fn name_search_is_case_insensitive_and_returns_first_match() {
    let mut repo = InMemoryContactRepository::new();
    repo.add_contact("Sam".into(), "first".into()).unwrap();
    repo.add_contact("SAM".into(), "second".into()).unwrap();

    let hit = repo.find_contact_by_name("sam").unwrap();
    assert_eq!(hit.notes, "first");
    assert!(repo.find_contact_by_name("samuel").is_none());
}

#[test]
fn missing_ids_are_reported_not_panicked() {
    let mut repo = InMemoryContactRepository::new();
    assert!(repo.get_contact(9).is_none());
    assert_eq!(
        repo.remove_contact(9).unwrap_err(),
        RepoError::ContactNotFound(9)
    );
    assert_eq!(
        repo.replace_contact(Contact::new(9, "x", "")).unwrap_err(),
        RepoError::ContactNotFound(9)
    );
}

#[test]
fn meeting_attendees_are_tracked_per_meeting() {
    let date = parse_meeting_date("2024-02-01 10:00").unwrap();
    let mut repo = InMemoryMeetingRepository::new();
    let standup = repo.add_meeting(date, "standup".into()).unwrap();
    let review = repo.add_meeting(date, "review".into()).unwrap();

    assert!(repo.add_attendee(standup, 1).unwrap());
    assert!(repo.add_attendee(review, 1).unwrap());
    assert!(!repo.add_attendee(review, 1).unwrap());
    assert_eq!(
        repo.add_attendee(99, 1).unwrap_err(),
        RepoError::MeetingNotFound(99)
    );

    assert_eq!(repo.remove_attendee_everywhere(1), 2);
    assert!(repo.get_meeting(standup).unwrap().attendees.is_empty());
    assert_eq!(
        repo.find_meeting_by_notes("REVIEW").unwrap().id,
        review
    );
    assert_eq!(repo.meeting_at(0).unwrap().id, standup);
}

#[test]
fn add_after_max_id_reuses_lowest_free_id() {
    let mut repo = InMemoryContactRepository::from_contacts(vec![
        Contact::new(u32::MAX, "Last", ""),
        Contact::new(1, "First", ""),
    ])
    .unwrap();

    let id = repo.add_contact("New".into(), "".into()).unwrap();
    assert_eq!(id, 2);
    assert_eq!(repo.list_contacts().len(), 3);
}

#[test]
fn meeting_add_after_max_id_reuses_lowest_free_id() {
    let date = parse_meeting_date("2024-02-01").unwrap();
    let mut repo = InMemoryMeetingRepository::new();
    repo.insert_meeting(contactbook_core::Meeting::new(u32::MAX, date, "last"))
        .unwrap();

    assert_eq!(repo.add_meeting(date, "next".into()).unwrap(), 1);
}
