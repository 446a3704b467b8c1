use paramcast::{ConfigError, Param, Target, ValidateError, ValidationError, rules, validate};

/********************
 * Pipeline ordering
 ********************/

#[test]
fn test_all_descriptors_processed_in_order() {
    let mut id: i64 = 0;
    let mut amount: f64 = 0.0;
    let mut active = false;

    let result = validate(vec![
        Param::new(Target::I64(&mut id), "id", "42"),
        Param::new(Target::F64(&mut amount), "amount", "12.5"),
        Param::new(Target::Bool(&mut active), "active", "true"),
    ]);

    assert!(result.is_ok());
    assert_eq!(id, 42);
    assert_eq!(amount, 12.5);
    assert!(active);
}

#[test]
fn test_rule_failure_short_circuits_later_descriptors() {
    let mut first = String::new();
    let mut second: i64 = 0;

    let err = validate(vec![
        Param::new(Target::Text(&mut first), "first", "").with_rule(rules::not_empty()),
        Param::new(Target::I64(&mut second), "second", "7"),
    ])
    .unwrap_err();

    assert_eq!(
        err.as_invalid(),
        Some(&ValidationError::rule(
            "first",
            "missing `first` parameter"
        ))
    );
    // The later descriptor was never processed.
    assert_eq!(second, 0);
}

#[test]
fn test_coercion_failure_short_circuits_later_descriptors() {
    let mut first: i32 = 0;
    let mut second = String::new();

    let err = validate(vec![
        Param::new(Target::I32(&mut first), "first", "not-a-number"),
        Param::new(Target::Text(&mut second), "second", "hello"),
    ])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid `first` parameter, `first` must be an int32"
    );
    assert_eq!(first, 0);
    assert_eq!(second, "");
}

#[test]
fn test_rules_run_in_order_first_failure_wins() {
    let mut slot = String::new();

    let err = validate(vec![
        Param::new(Target::Text(&mut slot), "field", "abc")
            .with_rule(|name, _| Err(ValidationError::rule(name, "first rule")))
            .with_rule(|name, _| Err(ValidationError::rule(name, "second rule"))),
    ])
    .unwrap_err();

    assert_eq!(err.to_string(), "first rule");
    assert_eq!(slot, "");
}

/********************
 * Defaults vs coercion
 ********************/

#[test]
fn test_rules_see_resolved_input() {
    let mut slot = String::new();

    let result = validate(vec![
        Param::new(Target::Text(&mut slot), "field", "")
            .with_default("5")
            .with_rule(|_, resolved| {
                assert_eq!(resolved, "5");
                Ok(())
            }),
    ]);

    assert!(result.is_ok());
}

#[test]
fn test_default_never_reaches_coercion() {
    let mut slot = String::new();

    let result = validate(vec![
        Param::new(Target::Text(&mut slot), "field", "")
            .with_default("5")
            .with_rule(rules::not_empty()),
    ]);

    // The rule saw "5" and passed, but nothing was coerced in.
    assert!(result.is_ok());
    assert_eq!(slot, "");
}

#[test]
fn test_non_empty_input_shadows_default_for_rules() {
    let mut slot: i64 = 0;

    let result = validate(vec![
        Param::new(Target::I64(&mut slot), "field", "9")
            .with_default("5")
            .with_rule(|_, resolved| {
                assert_eq!(resolved, "9");
                Ok(())
            }),
    ]);

    assert!(result.is_ok());
    assert_eq!(slot, 9);
}

/********************
 * Empty input
 ********************/

#[test]
fn test_empty_input_leaves_plain_target_at_prior_value() {
    let mut slot: i64 = 0;

    let result = validate(vec![Param::new(Target::I64(&mut slot), "field", "")]);

    assert!(result.is_ok());
    assert_eq!(slot, 0);
}

#[test]
fn test_empty_input_marks_nullable_absent_even_if_preset() {
    let mut slot: Option<i64> = Some(99);

    let result = validate(vec![Param::new(Target::OptI64(&mut slot), "field", "")]);

    assert!(result.is_ok());
    assert_eq!(slot, None);
}

/********************
 * Custom handlers
 ********************/

#[test]
fn test_custom_handler_invoked_with_raw_input() {
    let mut cents: Option<u64> = None;

    let result = validate(vec![
        Param::new(Target::Custom, "price", "12.34").with_handler(|raw, name| {
            let (dollars, rest) = raw
                .split_once('.')
                .ok_or_else(|| ValidationError::type_mismatch(name, "a price"))?;
            let dollars: u64 = dollars
                .parse()
                .map_err(|_| ValidationError::type_mismatch(name, "a price"))?;
            let fraction: u64 = rest
                .parse()
                .map_err(|_| ValidationError::type_mismatch(name, "a price"))?;
            cents = Some(dollars * 100 + fraction);
            Ok(())
        }),
    ]);

    assert!(result.is_ok());
    assert_eq!(cents, Some(1234));
}

#[test]
fn test_custom_handler_skipped_on_empty_input() {
    let mut invoked = false;

    let result = validate(vec![
        Param::new(Target::Custom, "price", "").with_handler(|_, _| {
            invoked = true;
            Ok(())
        }),
    ]);

    assert!(result.is_ok());
    assert!(!invoked);
}

#[test]
fn test_custom_handler_failure_leaves_destination_unwritten() {
    let mut cents: Option<u64> = None;

    let err = validate(vec![
        Param::new(Target::Custom, "price", "abcd").with_handler(|raw, name| {
            let value: u64 = raw
                .parse()
                .map_err(|_| ValidationError::type_mismatch(name, "a price"))?;
            cents = Some(value);
            Ok(())
        }),
    ])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid `price` parameter, `price` must be a price"
    );
    assert_eq!(cents, None);
}

#[test]
fn test_handler_wins_over_builtin_table() {
    let mut builtin_slot: i64 = 0;
    let mut handled = Vec::new();

    let result = validate(vec![
        Param::new(Target::I64(&mut builtin_slot), "field", "42").with_handler(|raw, _| {
            handled.push(raw.to_owned());
            Ok(())
        }),
    ]);

    assert!(result.is_ok());
    assert_eq!(handled, vec!["42".to_owned()]);
    // The built-in table was never consulted.
    assert_eq!(builtin_slot, 0);
}

/********************
 * Configuration errors
 ********************/

#[test]
fn test_custom_target_without_handler_is_config_error() {
    let err = validate(vec![Param::new(Target::Custom, "cat", "{ 'name': 'rae' }")]).unwrap_err();

    assert!(err.is_config());
    assert_eq!(err.as_invalid(), None);
    assert_eq!(
        err,
        ValidateError::Config(ConfigError::MissingHandler {
            name: "cat".to_owned()
        })
    );
}

#[test]
fn test_config_error_raised_even_for_empty_input() {
    let err = validate(vec![Param::new(Target::Custom, "cat", "")]).unwrap_err();

    assert!(err.is_config());
}

#[test]
fn test_config_error_is_not_a_validation_error() {
    let err = validate(vec![Param::new(Target::Custom, "cat", "x")]).unwrap_err();

    // Hosts that only surface ValidationError messages must be able to
    // tell this case apart without catching unwinds.
    match err {
        ValidateError::Config(ConfigError::MissingHandler { name }) => assert_eq!(name, "cat"),
        ValidateError::Invalid(_) => panic!("misconfiguration reported as user error"),
    }
}

/********************
 * Misc
 ********************/

#[test]
fn test_empty_descriptor_list_is_ok() {
    assert!(validate(Vec::new()).is_ok());
}

#[test]
fn test_no_rules_means_unconditionally_valid() {
    let mut slot = String::new();
    let result = validate(vec![Param::new(Target::Text(&mut slot), "field", "anything")]);

    assert!(result.is_ok());
    assert_eq!(slot, "anything");
}
