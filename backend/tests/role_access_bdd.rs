//! Behaviour tests for role-filtered navigation, view guarding and the
//! dashboard landing page.

use std::cell::RefCell;

use insure_backend::domain::{
    DashboardView, DisplayName, EmailAddress, GuardDecision, Identity, IdentityId, Role,
    SessionSnapshot, VisibleNavItem, guard_path, select, sidebar,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct AccessWorld {
    session: RefCell<SessionSnapshot>,
    sidebar: RefCell<Vec<VisibleNavItem>>,
    decision: RefCell<Option<GuardDecision>>,
    view: RefCell<Option<DashboardView>>,
}

fn identity(role: Role) -> Identity {
    Identity::new(
        IdentityId::new("42").expect("id"),
        DisplayName::new("Sam Taylor").expect("name"),
        EmailAddress::new("sam@example.com").expect("email"),
        role,
    )
}

#[fixture]
fn world() -> AccessWorld {
    AccessWorld::default()
}

#[given("a signed-in {role}")]
fn a_signed_in_role(world: &AccessWorld, role: String) {
    let role: Role = role.parse().expect("known role");
    *world.session.borrow_mut() = SessionSnapshot::ready(Some(identity(role)));
}

#[given("nobody is signed in yet")]
fn nobody_is_signed_in_yet(world: &AccessWorld) {
    *world.session.borrow_mut() = SessionSnapshot::ready(None);
}

#[given("a session that is still restoring")]
fn a_session_that_is_still_restoring(world: &AccessWorld) {
    *world.session.borrow_mut() = SessionSnapshot {
        is_loading: true,
        identity: None,
    };
}

#[when("the sidebar is built for {path}")]
fn the_sidebar_is_built_for(world: &AccessWorld, path: String) {
    let items = sidebar(world.session.borrow().identity.as_ref(), &path);
    *world.sidebar.borrow_mut() = items;
}

#[when("the view at {path} is guarded")]
fn the_view_at_path_is_guarded(world: &AccessWorld, path: String) {
    let (_, decision) = guard_path(&world.session.borrow(), &path);
    *world.decision.borrow_mut() = Some(decision);
}

#[when("the dashboard is selected")]
fn the_dashboard_is_selected(world: &AccessWorld) {
    let view = select(world.session.borrow().identity.as_ref());
    *world.view.borrow_mut() = view;
}

#[when("the dashboard is selected for the role name {name}")]
fn the_dashboard_is_selected_for_the_role_name(world: &AccessWorld, name: String) {
    *world.view.borrow_mut() = Some(DashboardView::from_role_name(&name));
}

#[then("the sidebar lists {labels}")]
fn the_sidebar_lists(world: &AccessWorld, labels: String) {
    let expected: Vec<&str> = labels.split(',').map(str::trim).collect();
    let listed: Vec<&str> = world
        .sidebar
        .borrow()
        .iter()
        .map(|entry| entry.item.label)
        .collect();
    assert_eq!(listed, expected);
}

#[then("the active entry is {label}")]
fn the_active_entry_is(world: &AccessWorld, label: String) {
    let active: Vec<&str> = world
        .sidebar
        .borrow()
        .iter()
        .filter(|entry| entry.active)
        .map(|entry| entry.item.label)
        .collect();
    assert_eq!(active, [label.as_str()]);
}

#[then("the view redirects to {target}")]
fn the_view_redirects_to(world: &AccessWorld, target: String) {
    match *world.decision.borrow() {
        Some(GuardDecision::Redirect { to }) => assert_eq!(to, target),
        other => panic!("expected a redirect, got {other:?}"),
    }
}

#[then("the view renders")]
fn the_view_renders(world: &AccessWorld) {
    assert_eq!(*world.decision.borrow(), Some(GuardDecision::Render));
}

#[then("the view shows the loading placeholder")]
fn the_view_shows_the_loading_placeholder(world: &AccessWorld) {
    assert_eq!(*world.decision.borrow(), Some(GuardDecision::Loading));
}

#[then("the {view} dashboard is shown")]
fn the_view_dashboard_is_shown(world: &AccessWorld, view: String) {
    let expected = DashboardView::from_role_name(&view);
    assert_eq!(*world.view.borrow(), Some(expected));
}

#[scenario(
    path = "tests/features/role_access.feature",
    name = "Agents see clients but not payments"
)]
fn agents_see_clients_but_not_payments(world: AccessWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/role_access.feature",
    name = "Customers see payments but not clients"
)]
fn customers_see_payments_but_not_clients(world: AccessWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/role_access.feature",
    name = "Visitors are sent to the login page"
)]
fn visitors_are_sent_to_the_login_page(world: AccessWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/role_access.feature",
    name = "The login page always renders"
)]
fn the_login_page_always_renders(world: AccessWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/role_access.feature",
    name = "A restoring session shows the loading placeholder"
)]
fn a_restoring_session_shows_the_loading_placeholder(world: AccessWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/role_access.feature",
    name = "Admins land on the admin dashboard"
)]
fn admins_land_on_the_admin_dashboard(world: AccessWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/role_access.feature",
    name = "Agents land on the agent dashboard"
)]
fn agents_land_on_the_agent_dashboard(world: AccessWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/role_access.feature",
    name = "Customers land on their portal"
)]
fn customers_land_on_their_portal(world: AccessWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/role_access.feature",
    name = "Unknown role names fall back to the customer portal"
)]
fn unknown_role_names_fall_back_to_the_customer_portal(world: AccessWorld) {
    drop(world);
}
