//! Contract tests for call binding: signature agreement, append/enumerate
//! scenarios, and reply-path symmetry.

#[cfg(test)]
mod tests {
    use core_types::{bus_service_id, ServiceId};
    use marshal::{
        append_results, check_signature, expected_signature, get_parameters, get_results,
        wire_signature, ArgEnumerator, CallMessage, MarshalError, Message, MethodSignature,
        Parameter,
    };
    use wire_types::{HostType, HostValue, RemotePath};

    use crate::test_helpers::message_with_arguments;

    // ===== signature agreement =====

    #[test]
    fn test_expected_and_derived_signatures_agree() {
        // void M(in string a, in int32 b) against a buffer holding exactly
        // those two values, in that order.
        let method = MethodSignature::new("M")
            .with_parameter(Parameter::input("a", HostType::Str))
            .with_parameter(Parameter::input("b", HostType::Int32));
        let message = message_with_arguments(
            ServiceId::new(),
            vec![HostValue::Str("text".to_string()), HostValue::Int32(7)],
        );

        assert_eq!(expected_signature(&method).unwrap(), "si");
        assert_eq!(wire_signature(&message).unwrap(), "si");
        check_signature(&method, &message).unwrap();
    }

    #[test]
    fn test_out_parameters_never_appear_in_call_signature() {
        let method = MethodSignature::new("M")
            .with_parameter(Parameter::input("a", HostType::Str))
            .with_parameter(Parameter::output("b", HostType::Int32))
            .with_parameter(Parameter::in_out("c", HostType::Bool));
        assert_eq!(expected_signature(&method).unwrap(), "sb");
    }

    // ===== append then enumerate =====

    #[test]
    fn test_void_method_appends_only_out_values() {
        // void M(in string a, out int32 b) with live values ["ignored", 42]
        // produces exactly one element: the OUT int.
        let method = MethodSignature::new("M")
            .with_parameter(Parameter::input("a", HostType::Str))
            .with_parameter(Parameter::output("b", HostType::Int32));
        let mut message = CallMessage::new(ServiceId::new());
        append_results(
            &method,
            None,
            &[HostValue::Str("ignored".to_string()), HostValue::Int32(42)],
            &mut message,
        )
        .unwrap();

        let mut cursor = ArgEnumerator::new(&message);
        assert!(cursor.move_next());
        assert_eq!(cursor.current().unwrap().into_value(), HostValue::Int32(42));
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_path_arguments_resolve_against_message_service() {
        let service = bus_service_id();
        let message = message_with_arguments(
            service,
            vec![HostValue::Path(RemotePath::new("/org/crossbus/bus"))],
        );

        let values = get_parameters(
            &MethodSignature::new("M")
                .with_parameter(Parameter::input("target", HostType::Path)),
            &message,
        )
        .unwrap();
        match values[0].as_ref().unwrap() {
            HostValue::Path(path) => assert_eq!(path.service(), Some(service)),
            other => panic!("expected path, got {:?}", other),
        }
    }

    // ===== failure scenarios =====

    #[test]
    fn test_parameter_shortfall_never_returns_partial_list() {
        let method = MethodSignature::new("M")
            .with_parameter(Parameter::input("a", HostType::Int32))
            .with_parameter(Parameter::input("b", HostType::Int32));
        let message =
            message_with_arguments(ServiceId::new(), vec![HostValue::Int32(1)]);

        assert!(matches!(
            get_parameters(&method, &message),
            Err(MarshalError::SignatureMismatch { .. })
        ));
    }

    #[test]
    fn test_unregistered_code_reports_version_skew() {
        let mut message = CallMessage::new(ServiceId::new());
        message.arguments_mut().write(&[b'q']).unwrap();

        let mut cursor = ArgEnumerator::new(&message);
        assert!(cursor.move_next());
        assert_eq!(
            cursor.current().unwrap_err(),
            MarshalError::UnknownWireType('q')
        );
    }

    // ===== reply-path symmetry =====

    #[test]
    fn test_reply_roundtrip_preserves_return_and_out_values() {
        let method = MethodSignature::new("Stat")
            .returning(HostType::Bool)
            .with_parameter(Parameter::input("path", HostType::Path))
            .with_parameter(Parameter::output("size", HostType::Int64))
            .with_parameter(Parameter::in_out("flags", HostType::UInt32));
        let mut message = CallMessage::new(ServiceId::new());

        append_results(
            &method,
            Some(&HostValue::Bool(true)),
            &[
                HostValue::Path(RemotePath::new("/f")),
                HostValue::Int64(4096),
                HostValue::UInt32(0b101),
            ],
            &mut message,
        )
        .unwrap();

        let (return_value, values) = get_results(&method, &message).unwrap();
        assert_eq!(return_value, Some(HostValue::Bool(true)));
        assert_eq!(
            values,
            vec![
                None,
                Some(HostValue::Int64(4096)),
                Some(HostValue::UInt32(0b101)),
            ]
        );
    }

    // ===== serialized signature contract =====

    #[test]
    fn test_method_signature_serialized_field_contract() {
        let method = MethodSignature::new("M")
            .with_parameter(Parameter::input("a", HostType::Str));
        let json = serde_json::to_string(&method).expect("signature serializes");
        assert!(json.contains("\"name\":\"M\""));
        assert!(json.contains("\"direction\":\"In\""));
        assert!(json.contains("\"host_type\":\"Str\""));
        assert!(json.contains("\"return_type\":null"));
    }
}
