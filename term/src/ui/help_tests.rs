use indoc::indoc;

use crate::ui::keys::{AppKeyMap, ConfigKeyMap};

use super::*;

struct TestKeys {
    app: AppKeyMap,
    config: ConfigKeyMap,
}

impl TestKeys {
    fn new() -> Self {
        Self {
            app: AppKeyMap::default(),
            config: ConfigKeyMap::default(),
        }
    }
}

impl KeyMap for TestKeys {
    fn short_help(&self) -> Vec<&KeyBinding> {
        vec![
            &self.app.quit,
            &self.config.up,
            &self.config.down,
            &self.config.refresh,
            &self.config.link,
            &self.config.unlink,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        vec![
            vec![&self.app.quit, &self.app.help],
            vec![&self.config.refresh],
            vec![&self.config.link, &self.config.unlink],
        ]
    }
}

#[test]
fn renders_short_help_on_one_line() {
    let keys = TestKeys::new();
    let help = HelpView::default();

    let view = help.view(&keys, 80);

    insta::assert_snapshot!(
        view,
        @"q: quit  ↑/k: up  ↓/j: down  r: refresh  l: link  u: unlink"
    );
}

#[test]
fn truncates_short_help_with_ellipsis() {
    let keys = TestKeys::new();
    let help = HelpView::default();

    let view = help.view(&keys, 30);

    assert_eq!(view, "q: quit  ↑/k: up  ↓/j: down …");
    assert!(view.width() <= 30);
}

#[test]
fn zero_width_means_unlimited() {
    let keys = TestKeys::new();
    let help = HelpView::default();

    assert_eq!(help.view(&keys, 0), help.view(&keys, 500));
}

#[test]
fn renders_full_help_in_columns() {
    let keys = TestKeys::new();
    let mut help = HelpView::default();
    help.toggle();

    let view = help.view(&keys, 80);

    let expected = indoc! {"
        q quit           r refresh    l link
        ? toggle help                 u unlink"};
    assert_eq!(view, expected);
    assert_eq!(view.matches('\n').count(), 1);
}

#[test]
fn drops_full_help_columns_that_do_not_fit() {
    let keys = TestKeys::new();
    let mut help = HelpView::default();
    help.toggle();

    let view = help.view(&keys, 28);

    let expected = indoc! {"
        q quit           r refresh …
        ? toggle help"};
    assert_eq!(view, expected);
}

#[test]
fn toggles_visibility() {
    let mut help = HelpView::new(false);
    assert!(!help.show_all());
    help.toggle();
    assert!(help.show_all());
    help.toggle();
    assert!(!help.show_all());
}

#[test]
fn skips_empty_groups() {
    let keys = AppKeyMap::default();
    let view = full_view(&[vec![], vec![&keys.quit]], 0);
    assert_eq!(view, "q quit");
}
