//! Fixed seed data loaded at process start.

use crate::collection::Collection;
use crate::course::Course;
use crate::student::Student;

/// The three starter courses.
pub fn courses() -> Collection<Course> {
    Collection::with_records(vec![
        Course::new(
            1,
            "Introduction to JavaScript",
            "Learn the basics of JavaScript, the most popular programming language for web development.",
        ),
        Course::new(
            2,
            "Advanced CSS Techniques",
            "Master advanced CSS concepts and techniques to create stunning web pages.",
        ),
        Course::new(
            3,
            "Node.js for Beginners",
            "Get started with Node.js and build scalable server-side applications.",
        ),
    ])
}

/// The three starter students.
pub fn students() -> Collection<Student> {
    Collection::with_records(vec![
        Student::new(1, "Maria"),
        Student::new(2, "Juan"),
        Student::new(3, "Jose"),
    ])
}
