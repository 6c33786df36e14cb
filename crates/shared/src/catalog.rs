//! Static course catalog keyed by semester.

use crate::domain::Semester;

static CATALOG: [[&str; 4]; 8] = [
    [
        "Calculus I",
        "Intro to Programming",
        "English Composition",
        "Basic Electronics",
    ],
    [
        "Calculus II",
        "OOP",
        "Discrete Mathematics",
        "Communication Skills",
    ],
    [
        "Data Structures",
        "Digital Logic Design",
        "Linear Algebra",
        "Probability and Statistics",
    ],
    [
        "Algorithms",
        "Database Systems",
        "Computer Organization",
        "Technical Writing",
    ],
    [
        "Operating Systems",
        "Computer Networks",
        "Software Engineering",
        "Numerical Methods",
    ],
    [
        "Web Engineering",
        "Distributed Systems",
        "Information Security",
        "AI Fundamentals",
    ],
    [
        "Machine Learning",
        "Mobile App Development",
        "Cloud Computing",
        "HCI",
    ],
    [
        "Deep Learning",
        "Big Data Analytics",
        "DevOps",
        "Final Year Project",
    ],
];

/// Courses offered in `semester`, in catalog order.
pub fn courses_for(semester: Semester) -> &'static [&'static str] {
    &CATALOG[usize::from(semester.get() - Semester::MIN)]
}
