//! Helpers for `<select>` form controls.

use crate::driver::Element;
use crate::locator::Locator;
use crate::result::{PageError, PageResult};

fn options_locator() -> Locator {
    Locator::tag_name("option")
}

/// Select every option whose visible text equals `text`.
///
/// Already-selected options are left alone so multi-selects are not toggled
/// off. Fails with `NotFound` when no option matches.
pub fn select_by_visible_text<E: Element>(select: &E, text: &str) -> PageResult<()> {
    let mut matched = false;
    for option in select.find_all(&options_locator())? {
        if option.text()? == text {
            matched = true;
            if !option.is_selected()? {
                option.click()?;
            }
        }
    }
    if matched {
        Ok(())
    } else {
        Err(PageError::NotFound {
            locator: format!("option with text {text:?}"),
        })
    }
}

/// Text of the first selected option
pub fn first_selected_option_text<E: Element>(select: &E) -> PageResult<String> {
    for option in select.find_all(&options_locator())? {
        if option.is_selected()? {
            return option.text();
        }
    }
    Err(PageError::NotFound {
        locator: "selected option".to_string(),
    })
}

/// Visible text of every option, in document order
pub fn option_texts<E: Element>(select: &E) -> PageResult<Vec<String>> {
    select
        .find_all(&options_locator())?
        .iter()
        .map(|option| option.text())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::driver::Driver;
    use crate::mock::{ClickEffect, MockDriver, MockNode};

    fn product_select() -> (MockDriver, Vec<usize>) {
        let driver = MockDriver::new();
        let select = driver.add(&Locator::id("product"), MockNode::new());
        let option = Locator::tag_name("option");
        let ids: Vec<usize> = ["Firefox", "Thunderbird", "SeaMonkey"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let node = MockNode::new().text(*name);
                let node = if i == 0 { node.selected() } else { node };
                driver.append(select, &option, node)
            })
            .collect();
        for id in &ids {
            driver.on_click(*id, ClickEffect::Select(*id));
        }
        (driver, ids)
    }

    #[test]
    fn test_select_by_visible_text() {
        let (driver, ids) = product_select();
        let select = driver.find(&Locator::id("product")).unwrap();
        select_by_visible_text(&select, "Thunderbird").unwrap();
        assert!(driver.is_selected(ids[1]));
        assert!(!driver.was_clicked(ids[0]));
    }

    #[test]
    fn test_select_already_selected_not_clicked() {
        let (driver, ids) = product_select();
        let select = driver.find(&Locator::id("product")).unwrap();
        select_by_visible_text(&select, "Firefox").unwrap();
        assert!(!driver.was_clicked(ids[0]));
        assert!(driver.is_selected(ids[0]));
    }

    #[test]
    fn test_select_unknown_option() {
        let (driver, _) = product_select();
        let select = driver.find(&Locator::id("product")).unwrap();
        assert!(select_by_visible_text(&select, "Camino")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_first_selected_and_texts() {
        let (driver, _) = product_select();
        let select = driver.find(&Locator::id("product")).unwrap();
        assert_eq!(first_selected_option_text(&select).unwrap(), "Firefox");
        assert_eq!(
            option_texts(&select).unwrap(),
            vec!["Firefox", "Thunderbird", "SeaMonkey"]
        );
    }
}
