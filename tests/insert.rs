use hashroute::{Constraint, InsertError, Pattern, Router, Segment};

struct InsertTest(Vec<(&'static str, Result<(), InsertError>)>);

impl InsertTest {
    fn run(self) {
        let mut router = Router::new();
        for (route, expected) in self.0 {
            let got = router.insert(route, route.to_owned());
            assert_eq!(got, expected, "{route}");
        }
    }
}

fn conflict(with: &'static str) -> InsertError {
    InsertError::Conflict { with: with.into() }
}

fn invalid(segment: &'static str) -> InsertError {
    InsertError::InvalidParam {
        segment: segment.into(),
    }
}

#[test]
fn overlapping_patterns_are_allowed() {
    InsertTest(vec![
        ("#/services/:name", Ok(())),
        ("#/services/:other", Ok(())),
        ("#/services/:id#num", Ok(())),
        ("#/services/:rest*", Ok(())),
        ("#/services/upload", Ok(())),
        ("#/:section/upload", Ok(())),
        ("#/:a/:b", Ok(())),
    ])
    .run()
}

#[test]
fn duplicates() {
    InsertTest(vec![
        ("#/settings", Ok(())),
        ("#/settings", Err(conflict("#/settings"))),
        ("#/services/:name", Ok(())),
        ("#/services/:name", Err(conflict("#/services/:name"))),
        ("#/files/:path*", Ok(())),
        ("#/files/:path*", Err(conflict("#/files/:path*"))),
        ("", Ok(())),
        ("", Err(conflict(""))),
    ])
    .run()
}

#[test]
fn unnamed_param() {
    InsertTest(vec![
        ("#/:", Err(InsertError::UnnamedParam)),
        ("#/services/:/edit", Err(InsertError::UnnamedParam)),
        ("#/files/:*", Err(InsertError::UnnamedParam)),
        ("#/services/:#num", Err(InsertError::UnnamedParam)),
    ])
    .run()
}

#[test]
fn invalid_param() {
    InsertTest(vec![
        ("#/services/:ix#hex", Err(invalid(":ix#hex"))),
        ("#/services/:ix#", Err(invalid(":ix#"))),
        ("#/services/:ix#num#num", Err(invalid(":ix#num#num"))),
        ("#/files/:path*#num", Err(invalid(":path*#num"))),
        ("#/files/:path#num*", Err(invalid(":path#num*"))),
        ("#/files/:pa*th", Err(invalid(":pa*th"))),
        ("#/files/:path**", Err(invalid(":path**"))),
    ])
    .run()
}

#[test]
fn catch_all_limit() {
    InsertTest(vec![
        ("#/files/:a*/:b*", Err(InsertError::TooManyCatchAll)),
        ("#/:a*/x/:b*", Err(InsertError::TooManyCatchAll)),
        ("#/:a*/x/:b", Ok(())),
        ("#/files/:path*/raw", Ok(())),
    ])
    .run()
}

#[test]
fn duplicate_param() {
    InsertTest(vec![
        (
            "#/:name/:name",
            Err(InsertError::DuplicateParam {
                name: "name".into(),
            }),
        ),
        (
            "#/:name/:name#num",
            Err(InsertError::DuplicateParam {
                name: "name".into(),
            }),
        ),
        (
            "#/:name/x/:name*",
            Err(InsertError::DuplicateParam {
                name: "name".into(),
            }),
        ),
        ("#/:name/:names", Ok(())),
    ])
    .run()
}

#[test]
fn failed_insert_leaves_table_unchanged() {
    let mut router = Router::new();
    router.insert("#/services/:name", 1).unwrap();
    assert!(router.insert("#/services/:a*/:b*", 2).is_err());
    assert!(router.insert("#/services/:name", 3).is_err());

    assert_eq!(router.len(), 1);
    assert_eq!(*router.at("#/services/foo").unwrap().value, 1);
}

#[test]
fn from_routes_keeps_order() {
    let router = Router::from_routes([
        ("#/settings", 0),
        ("#/services/upload", 1),
        ("#/services/:name/ui", 2),
        ("#/services/:name", 3),
        ("#/services", 4),
    ])
    .unwrap();

    assert!(router.routes().eq([
        "#/settings",
        "#/services/upload",
        "#/services/:name/ui",
        "#/services/:name",
        "#/services",
    ]));

    assert_eq!(
        Router::from_routes([("#/a", 0), ("#/:", 1)]).unwrap_err(),
        InsertError::UnnamedParam
    );
}

#[test]
fn compiled_segments() {
    let pattern = Pattern::new("#/services/:name/:ix#num/:rest*/edit").unwrap();

    assert_eq!(
        pattern.segments(),
        &[
            Segment::Literal("#".into()),
            Segment::Literal("services".into()),
            Segment::Param("name".into()),
            Segment::Constrained("ix".into(), Constraint::Numeric),
            Segment::CatchAll("rest".into()),
            Segment::Literal("edit".into()),
        ]
    );
    assert!(pattern.param_names().eq(["name", "ix", "rest"]));
    assert!(Pattern::new("#/services/upload").unwrap().is_static());
}

#[test]
fn error_messages() {
    assert_eq!(
        conflict("#/settings").to_string(),
        "insertion failed due to conflict with previously registered route: #/settings"
    );
    assert_eq!(
        invalid(":ix#hex").to_string(),
        "invalid parameter segment `:ix#hex`"
    );
}
