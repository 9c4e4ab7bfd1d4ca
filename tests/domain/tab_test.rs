use cisec_nexus::domain::{Dashboard, Tab};

#[test]
fn given_known_tab_ids_when_parsing_then_resolves_each_screen() {
    assert_eq!("grades".parse::<Tab>(), Ok(Tab::Grades));
    assert_eq!("simulator".parse::<Tab>(), Ok(Tab::Simulator));
    assert_eq!("Courses".parse::<Tab>(), Ok(Tab::Courses));
    assert_eq!("dashboard".parse::<Tab>(), Ok(Tab::Dashboard));
}

#[test]
fn given_unknown_tab_id_when_parsing_then_falls_back_to_dashboard() {
    assert_eq!("future".parse::<Tab>(), Ok(Tab::Dashboard));
}

#[test]
fn given_dashboard_when_built_then_future_card_has_no_target() {
    let dashboard = Dashboard::current();

    assert_eq!(dashboard.semester_progress_percent, 60);
    assert_eq!(dashboard.cards.len(), 4);
    let future = dashboard.cards.iter().find(|c| c.id == "future").unwrap();
    assert!(future.target.is_none());
}
