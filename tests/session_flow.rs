use std::collections::BTreeMap;

use skill_quiz::{OptionMark, Progress, Question, Quiz, Session, SessionError};

fn question(options: usize, correct: &[usize], multiple: bool) -> Question {
    Question {
        title: format!("question with answers {correct:?}"),
        code_block: Vec::new(),
        options: (0..options).map(|i| format!("option {i}")).collect(),
        code_block_options: BTreeMap::new(),
        explanation: String::new(),
        correct_answers: correct.to_vec(),
        is_multiple_choice: multiple,
        is_code_block_question: false,
    }
}

fn quiz(questions: Vec<Question>) -> Quiz {
    Quiz {
        id: "flow".to_string(),
        title: "Flow".to_string(),
        questions,
    }
}

fn answer(session: &mut Session, options: &[usize]) -> Progress {
    for &option in options {
        session.select_option(option, true).unwrap();
    }
    session.check_answer().unwrap();
    session.advance().unwrap()
}

#[test]
fn two_question_walkthrough() {
    let mut session = Session::new(quiz(vec![
        question(2, &[0], false),
        question(3, &[1, 2], true),
    ]));

    assert_eq!(answer(&mut session, &[0]), Progress::InProgress(1));

    session.select_option(1, true).unwrap();
    let verdict = session.check_answer().unwrap();
    assert!(!verdict.wrong);
    assert_eq!(session.advance().unwrap(), Progress::Complete);

    let first: Vec<_> = session.committed(0).unwrap().iter().collect();
    let second: Vec<_> = session.committed(1).unwrap().iter().collect();
    assert_eq!(first, vec![0]);
    assert_eq!(second, vec![1]);

    let score = session.compute_score().unwrap();
    assert_eq!(score.points, 2);
    assert_eq!(score.possible, 3);
    assert_eq!(score.questions, 2);
    assert_eq!(score.percent(), 100);
}

#[test]
fn one_miss_out_of_three_scores_zero_percent() {
    let mut session = Session::new(quiz(vec![
        question(2, &[0], false),
        question(2, &[0], false),
        question(2, &[0], false),
    ]));

    answer(&mut session, &[0]);
    answer(&mut session, &[0]);
    answer(&mut session, &[1]);

    let score = session.compute_score().unwrap();
    assert_eq!(score.points, 2);
    assert_eq!(score.to_string(), "0%");
}

#[test]
fn index_increases_by_exactly_one() {
    let mut session = Session::new(quiz(vec![
        question(2, &[0], false),
        question(2, &[0], false),
        question(2, &[0], false),
    ]));

    for expected in 1..3 {
        assert_eq!(answer(&mut session, &[0]), Progress::InProgress(expected));
    }
    assert_eq!(answer(&mut session, &[0]), Progress::Complete);
}

#[test]
fn rejected_transitions_keep_state() {
    let mut session = Session::new(quiz(vec![question(3, &[2], false)]));

    assert_eq!(session.advance(), Err(SessionError::NotChecked));
    assert_eq!(session.check_answer(), Err(SessionError::NothingSelected));
    assert_eq!(session.compute_score(), Err(SessionError::NotComplete));
    assert_eq!(session.progress(), Progress::InProgress(0));

    session.select_option(0, true).unwrap();
    assert_eq!(session.option_mark(0), OptionMark::Selected);
    session.select_option(2, true).unwrap();
    assert_eq!(session.option_mark(0), OptionMark::Unselected);

    assert!(!session.check_answer().unwrap().wrong);
    assert_eq!(session.option_mark(2), OptionMark::Correct);
}

#[test]
fn empty_quiz_scores_nothing() {
    let session = Session::new(quiz(Vec::new()));
    let score = session.compute_score().unwrap();
    assert_eq!((score.points, score.possible, score.percent()), (0, 0, 0));
}
