#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use crate::core::contact::{
        AnalyticsSink, CaptchaProvider, DEFAULT_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
        GatewayError, GatewayResponse, LeadGateway, LeadSubmission, MISSING_FIELDS_MESSAGE,
        NETWORK_ERROR_MESSAGE, NoopAnalytics, NoopCaptcha, SubmitState, UtmParams, format_phone,
        interpret_response, is_valid_email, normalize_website, run_submission,
    };

    // ---- test doubles ----

    struct MockGateway {
        calls: Cell<usize>,
        last_body: RefCell<Option<String>>,
        response: Result<GatewayResponse, GatewayError>,
    }

    impl MockGateway {
        fn responding(status: u16, body: &str) -> Self {
            Self {
                calls: Cell::new(0),
                last_body: RefCell::new(None),
                response: Ok(GatewayResponse {
                    status,
                    body: body.to_string(),
                }),
            }
        }

        fn failing() -> Self {
            Self {
                calls: Cell::new(0),
                last_body: RefCell::new(None),
                response: Err(GatewayError::Transport("connection refused".to_string())),
            }
        }
    }

    impl LeadGateway for MockGateway {
        async fn post_lead(
            &self,
            _endpoint: &str,
            lead: &LeadSubmission,
        ) -> Result<GatewayResponse, GatewayError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_body.borrow_mut() =
                Some(serde_json::to_string(lead).expect("lead serializes"));
            self.response.clone()
        }
    }

    struct FixedCaptcha {
        token: &'static str,
    }

    impl CaptchaProvider for FixedCaptcha {
        fn response_token(&self) -> String {
            self.token.to_string()
        }

        fn reset(&self) {}
    }

    #[derive(Default)]
    struct RecordingAnalytics {
        events: RefCell<Vec<(String, f64)>>,
    }

    impl AnalyticsSink for RecordingAnalytics {
        fn record_event(&self, name: &str, lead_score: f64) {
            self.events
                .borrow_mut()
                .push((name.to_string(), lead_score));
        }
    }

    fn complete_lead() -> LeadSubmission {
        LeadSubmission {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            message: "We'd like help automating our intake process.".to_string(),
            lead_source: "website".to_string(),
            ..Default::default()
        }
    }

    // ---- phone formatting ----

    #[test]
    fn test_format_phone_empty_and_non_digits() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("abc-()"), "");
    }

    #[test]
    fn test_format_phone_partial_groups() {
        assert_eq!(format_phone("9"), "(9");
        assert_eq!(format_phone("915"), "(915");
        assert_eq!(format_phone("9155"), "(915) 5");
        assert_eq!(format_phone("915555"), "(915) 555");
        assert_eq!(format_phone("9155550"), "(915) 555-0");
    }

    #[test]
    fn test_format_phone_full_number() {
        assert_eq!(format_phone("9155550123"), "(915) 555-0123");
    }

    #[test]
    fn test_format_phone_strips_existing_punctuation() {
        assert_eq!(format_phone("(915) 555-0123"), "(915) 555-0123");
        assert_eq!(format_phone("915.555.0123"), "(915) 555-0123");
    }

    #[test]
    fn test_format_phone_drops_overflow_digits() {
        assert_eq!(format_phone("915555012345678"), "(915) 555-0123");
    }

    // ---- website normalization ----

    #[test]
    fn test_normalize_website_prepends_scheme() {
        assert_eq!(
            normalize_website("www.abccorp.com"),
            "https://www.abccorp.com"
        );
        assert_eq!(normalize_website("  example.com  "), "https://example.com");
    }

    #[test]
    fn test_normalize_website_keeps_existing_scheme() {
        assert_eq!(
            normalize_website("https://abccorp.com"),
            "https://abccorp.com"
        );
        assert_eq!(normalize_website("http://abccorp.com"), "http://abccorp.com");
    }

    #[test]
    fn test_normalize_website_empty_stays_empty() {
        assert_eq!(normalize_website(""), "");
        assert_eq!(normalize_website("   "), "");
    }

    // ---- email validation ----

    #[test]
    fn test_email_accepts_basic_shape() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@mail.example.co"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email(""));
    }

    // ---- UTM attribution ----

    #[test]
    fn test_utm_url_values_win_over_defaults() {
        let defaults = UtmParams {
            source: "hidden-src".to_string(),
            medium: "hidden-med".to_string(),
            campaign: String::new(),
        };
        let merged =
            UtmParams::merge_query("?utm_source=google&utm_campaign=spring+launch", defaults);
        assert_eq!(merged.source, "google");
        assert_eq!(merged.medium, "hidden-med");
        assert_eq!(merged.campaign, "spring launch");
    }

    #[test]
    fn test_utm_empty_query_keeps_defaults() {
        let defaults = UtmParams {
            source: "newsletter".to_string(),
            ..Default::default()
        };
        let merged = UtmParams::merge_query("", defaults.clone());
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_utm_empty_value_does_not_override() {
        let defaults = UtmParams {
            source: "newsletter".to_string(),
            ..Default::default()
        };
        let merged = UtmParams::merge_query("utm_source=&foo=bar", defaults);
        assert_eq!(merged.source, "newsletter");
    }

    #[test]
    fn test_utm_percent_decoding() {
        let merged = UtmParams::merge_query("utm_medium=paid%20social", UtmParams::default());
        assert_eq!(merged.medium, "paid social");
    }

    // ---- lead record ----

    #[test]
    fn test_lead_serialization_omits_empty_optionals() {
        let lead = complete_lead();
        let json = serde_json::to_value(&lead).expect("lead serializes");
        let object = json.as_object().expect("lead is an object");

        assert_eq!(object["first_name"], "John");
        assert_eq!(object["lead_source"], "website");
        assert!(!object.contains_key("phone"));
        assert!(!object.contains_key("company_website"));
        assert!(!object.contains_key("recaptcha_token"));
    }

    #[test]
    fn test_lead_serialization_keeps_filled_optionals() {
        let lead = LeadSubmission {
            phone: "(915) 555-0123".to_string(),
            budget_range: "$10k-$25k".to_string(),
            ..complete_lead()
        };
        let json = serde_json::to_value(&lead).expect("lead serializes");
        assert_eq!(json["phone"], "(915) 555-0123");
        assert_eq!(json["budget_range"], "$10k-$25k");
    }

    #[test]
    fn test_missing_required_detects_blank_fields() {
        assert!(!complete_lead().missing_required());

        for blank in ["first_name", "last_name", "email", "message"] {
            let mut lead = complete_lead();
            match blank {
                "first_name" => lead.first_name = "  ".to_string(),
                "last_name" => lead.last_name = String::new(),
                "email" => lead.email = String::new(),
                _ => lead.message = "\t".to_string(),
            }
            assert!(lead.missing_required(), "{blank} should be required");
        }
    }

    // ---- response interpretation ----

    #[test]
    fn test_interpret_success_with_server_message() {
        let state = interpret_response(
            200,
            r#"{"success": true, "message": "Thanks!", "data": {"lead_score": 85}}"#,
        );
        assert_eq!(
            state,
            SubmitState::Success {
                message: "Thanks!".to_string(),
                lead_score: Some(85.0),
            }
        );
    }

    #[test]
    fn test_interpret_success_falls_back_to_default_message() {
        let state = interpret_response(200, r#"{"success": true}"#);
        assert_eq!(
            state,
            SubmitState::Success {
                message: DEFAULT_SUCCESS_MESSAGE.to_string(),
                lead_score: None,
            }
        );
    }

    #[test]
    fn test_interpret_2xx_with_falsy_flag_is_error() {
        let state = interpret_response(200, r#"{"success": false, "message": "Rejected."}"#);
        assert_eq!(
            state,
            SubmitState::Error {
                message: "Rejected.".to_string(),
            }
        );
    }

    #[test]
    fn test_interpret_500_reads_detail() {
        let state = interpret_response(500, r#"{"detail": "server error"}"#);
        assert_eq!(
            state,
            SubmitState::Error {
                message: "server error".to_string(),
            }
        );
    }

    #[test]
    fn test_interpret_message_preferred_over_detail() {
        let state = interpret_response(
            429,
            r#"{"success": false, "message": "Slow down.", "detail": "rate limited"}"#,
        );
        assert_eq!(
            state,
            SubmitState::Error {
                message: "Slow down.".to_string(),
            }
        );
    }

    #[test]
    fn test_interpret_error_without_explanation_uses_fallback() {
        let state = interpret_response(500, r#"{"success": false}"#);
        assert_eq!(
            state,
            SubmitState::Error {
                message: DEFAULT_ERROR_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn test_interpret_unparseable_body_is_network_class() {
        let state = interpret_response(500, "<html>Bad Gateway</html>");
        assert_eq!(
            state,
            SubmitState::Error {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            }
        );
    }

    // ---- submission workflow ----

    #[tokio::test]
    async fn test_missing_fields_skip_the_network_call() {
        let gateway = MockGateway::responding(200, r#"{"success": true}"#);
        let lead = LeadSubmission {
            first_name: String::new(),
            ..complete_lead()
        };

        let state =
            run_submission(&gateway, &NoopCaptcha, &NoopAnalytics, "/api/contact", &lead).await;

        assert_eq!(
            state,
            SubmitState::Error {
                message: MISSING_FIELDS_MESSAGE.to_string(),
            }
        );
        assert_eq!(gateway.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_successful_submission_records_analytics() {
        let gateway = MockGateway::responding(
            200,
            r#"{"success": true, "message": "Thanks!", "data": {"lead_score": 70}}"#,
        );
        let analytics = RecordingAnalytics::default();

        let state = run_submission(
            &gateway,
            &NoopCaptcha,
            &analytics,
            "/api/contact",
            &complete_lead(),
        )
        .await;

        assert_eq!(
            state,
            SubmitState::Success {
                message: "Thanks!".to_string(),
                lead_score: Some(70.0),
            }
        );
        assert_eq!(gateway.calls.get(), 1);
        assert_eq!(
            analytics.events.borrow().as_slice(),
            &[("form_submit".to_string(), 70.0)]
        );
    }

    #[tokio::test]
    async fn test_captcha_token_is_attached_when_present() {
        let gateway = MockGateway::responding(200, r#"{"success": true}"#);
        let captcha = FixedCaptcha { token: "tok-123" };

        run_submission(
            &gateway,
            &captcha,
            &NoopAnalytics,
            "/api/contact",
            &complete_lead(),
        )
        .await;

        let body = gateway.last_body.borrow().clone().expect("request sent");
        assert!(body.contains(r#""recaptcha_token":"tok-123""#));
    }

    #[tokio::test]
    async fn test_absent_captcha_sends_no_token_field() {
        let gateway = MockGateway::responding(200, r#"{"success": true}"#);

        run_submission(
            &gateway,
            &NoopCaptcha,
            &NoopAnalytics,
            "/api/contact",
            &complete_lead(),
        )
        .await;

        let body = gateway.last_body.borrow().clone().expect("request sent");
        assert!(!body.contains("recaptcha_token"));
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_detail_without_analytics() {
        let gateway = MockGateway::responding(500, r#"{"detail": "server error"}"#);
        let analytics = RecordingAnalytics::default();

        let state = run_submission(
            &gateway,
            &NoopCaptcha,
            &analytics,
            "/api/contact",
            &complete_lead(),
        )
        .await;

        assert_eq!(
            state,
            SubmitState::Error {
                message: "server error".to_string(),
            }
        );
        assert!(analytics.events.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_network_message() {
        let gateway = MockGateway::failing();

        let state = run_submission(
            &gateway,
            &NoopCaptcha,
            &NoopAnalytics,
            "/api/contact",
            &complete_lead(),
        )
        .await;

        assert_eq!(
            state,
            SubmitState::Error {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            }
        );
        assert_eq!(gateway.calls.get(), 1);
    }
}
