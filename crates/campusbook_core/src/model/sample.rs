//! Sample contacts for first-run population.

use crate::model::fields::{Email, Gender, Location, ModuleCode, Name, Phone};
use crate::model::person::{Person, Professor, Student, TeachingAssistant};
use crate::model::profile::Rating;
use crate::model::tag::Tag;
use std::collections::BTreeSet;

/// Returns the built-in seed contacts used when no book file exists yet.
pub fn sample_persons() -> Vec<Person> {
    vec![
        sample_student("Alex Yeoh", "87438807", "alexyeoh@example.com", "M", "Chess club room", &["friends"]),
        sample_student("Bernice Yu", "99272758", "berniceyu@example.com", "M", "UTown", &["colleagues", "friends"]),
        sample_student("Charlotte Oliveiro", "93210283", "charlotte@example.com", "F", "NUS", &["neighbours"]),
        Person::Professor(Professor {
            name: sample_name("Wong Tin Lok"),
            module_code: ModuleCode::new("CS1231S").expect("valid sample module code"),
            phone: sample_phone("91031282"),
            email: sample_email("wongtk@example.com"),
            gender: sample_gender("M"),
            location: sample_location("COM2 LT4"),
            tags: tag_set(&["family"]),
            rating: Some(Rating::new("5").expect("valid sample rating")),
            specialisation: None,
            office_hour: None,
            github_username: None,
        }),
        Person::TeachingAssistant(TeachingAssistant {
            name: sample_name("Irfan Ibrahim"),
            module_code: ModuleCode::new("CS2100").expect("valid sample module code"),
            phone: sample_phone("92492021"),
            email: sample_email("irfan@example.com"),
            gender: sample_gender("M"),
            location: sample_location("COM2-0210"),
            tags: tag_set(&["testing"]),
            rating: Some(Rating::new("4").expect("valid sample rating")),
            github_username: None,
        }),
        sample_student("Roy Balakrishnan", "92624417", "royb@example.com", "M", "Research Lab", &["colleagues"]),
    ]
}

fn sample_student(
    name: &str,
    phone: &str,
    email: &str,
    gender: &str,
    location: &str,
    tags: &[&str],
) -> Person {
    Person::Student(Student {
        name: sample_name(name),
        phone: sample_phone(phone),
        email: sample_email(email),
        gender: sample_gender(gender),
        location: sample_location(location),
        tags: tag_set(tags),
    })
}

fn sample_name(value: &str) -> Name {
    Name::new(value).expect("valid sample name")
}

fn sample_phone(value: &str) -> Phone {
    Phone::new(value).expect("valid sample phone")
}

fn sample_email(value: &str) -> Email {
    Email::new(value).expect("valid sample email")
}

fn sample_gender(value: &str) -> Gender {
    Gender::new(value).expect("valid sample gender")
}

fn sample_location(value: &str) -> Location {
    Location::new(value).expect("valid sample location")
}

fn tag_set(names: &[&str]) -> BTreeSet<Tag> {
    names
        .iter()
        .map(|name| Tag::new(*name).expect("valid sample tag"))
        .collect()
}
