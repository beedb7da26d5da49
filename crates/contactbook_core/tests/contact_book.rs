use contactbook_core::{
    parse_meeting_date, ContactBook, ContactEdit, InMemoryContactRepository,
    InMemoryMeetingRepository, MeetingEdit, ServiceError,
};

type Book = ContactBook<InMemoryContactRepository, InMemoryMeetingRepository>;

fn empty_book() -> Book {
    ContactBook::new(
        InMemoryContactRepository::new(),
        InMemoryMeetingRepository::new(),
    )
}

#[test]
fn edit_with_no_replacements_keeps_fields() {
    let mut book = empty_book();
    let ada = book.add_contact("Ada", "mathematician").unwrap();

    let unchanged = book.edit_contact(ada.id, ContactEdit::default()).unwrap();
    assert_eq!(unchanged, ada);

    let renamed = book
        .edit_contact(
            ada.id,
            ContactEdit {
                name: Some("Ada King".to_string()),
                notes: None,
            },
        )
        .unwrap();
    assert_eq!(renamed.name, "Ada King");
    assert_eq!(renamed.notes, "mathematician");
    assert_eq!(book.contacts(), &[renamed]);
}

#[test]
fn edit_unknown_contact_is_not_found() {
    let mut book = empty_book();
    let err = book.edit_contact(5, ContactEdit::default()).unwrap_err();
    assert_eq!(err, ServiceError::ContactNotFound(5));
}

#[test]
fn delete_removes_exactly_one_contact() {
    let mut book = empty_book();
    let first = book.add_contact("Sam", "first").unwrap();
    let second = book.add_contact("Sam", "second").unwrap();
    let other = book.add_contact("Alan", "").unwrap();

    let removed = book.delete_contact(second.id).unwrap();
    assert_eq!(removed, second);
    assert_eq!(book.contacts(), &[first, other]);

    let err = book.delete_contact(second.id).unwrap_err();
    assert_eq!(err, ServiceError::ContactNotFound(second.id));
    assert_eq!(book.contacts().len(), 2);
}

#[test]
fn find_reports_missing_name() {
    let mut book = empty_book();
    book.add_contact("Grace", "").unwrap();

    assert_eq!(book.find_contact("GRACE").unwrap().name, "Grace");
    assert_eq!(
        book.find_contact("Linus").unwrap_err(),
        ServiceError::ContactNameNotFound("Linus".to_string())
    );
}

#[test]
fn meeting_use_cases_never_touch_contacts() {
    let mut book = empty_book();
    let date = parse_meeting_date("2024-06-01 09:30").unwrap();
    let later = parse_meeting_date("2024-06-02").unwrap();

    let meeting = book.add_meeting(date, "planning").unwrap();
    let edited = book
        .edit_meeting(
            meeting.id,
            MeetingEdit {
                date: Some(later),
                notes: None,
            },
        )
        .unwrap();

    assert_eq!(edited.date, later);
    assert_eq!(edited.notes, "planning");
    assert!(book.contacts().is_empty());
    assert_eq!(book.find_meeting("Planning").unwrap().id, meeting.id);

    book.delete_meeting(meeting.id).unwrap();
    assert!(book.meetings().is_empty());
    assert!(book.contacts().is_empty());
}

#[test]
fn attendees_require_existing_records_and_follow_contact_deletes() {
    let mut book = empty_book();
    let date = parse_meeting_date("2024-06-01 09:30").unwrap();
    let meeting = book.add_meeting(date, "review").unwrap();
    let ada = book.add_contact("Ada", "").unwrap();

    assert_eq!(
        book.add_to_meeting(meeting.id, 42).unwrap_err(),
        ServiceError::ContactNotFound(42)
    );
    assert_eq!(
        book.add_to_meeting(42, ada.id).unwrap_err(),
        ServiceError::MeetingNotFound(42)
    );

    assert!(book.add_to_meeting(meeting.id, ada.id).unwrap());
    assert!(!book.add_to_meeting(meeting.id, ada.id).unwrap());

    let edited = book
        .edit_meeting(
            meeting.id,
            MeetingEdit {
                date: None,
                notes: Some("retro".to_string()),
            },
        )
        .unwrap();
    assert!(edited.has_attendee(ada.id));

    let (_, attendees) = book.meeting_attendees(meeting.id).unwrap();
    assert_eq!(attendees, vec![&ada]);

    book.delete_contact(ada.id).unwrap();
    let (_, attendees) = book.meeting_attendees(meeting.id).unwrap();
    assert!(attendees.is_empty());
    assert_eq!(
        book.remove_from_meeting(meeting.id, ada.id).unwrap_err(),
        ServiceError::NotAttending {
            meeting_id: meeting.id,
            contact_id: ada.id,
        }
    );
}
