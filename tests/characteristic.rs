use either::Either::Left;
use freewheel::{
    Error, ParseError,
    avec::Characteristic,
    characteristic::{
        AdjustmentReason, CrossTrainerData, CurrentTime, DateTime, DayOfWeek, Energy,
        HttpsSecurity, Month, MovementDirection, ObjectSize, SoftwareRevisionString,
        StepClimberData, Time, TreadmillData, TxPowerLevel, UvIndex, cross_trainer, step_climber,
    },
    registry::{self, AnyCharacteristic},
    sans::{Decoder, schema::Schema},
    service,
    unit::{Measurement, Unit},
};
use tinyvec::ArrayVec;

/// Number of bytes the decoder consumes for a value.
fn consumed(schema: &Schema, r: &[u8]) -> usize {
    let state = Decoder::new(schema);
    let mut i = state.size();
    let (_, mut successor) = state.advance(&r[..i]);

    while let Left(state) = successor {
        let size = state.size();
        let (_, _, next) = state.advance(&r[i..i + size]);
        i += size;
        successor = next;
    }

    i
}

#[test]
fn cross_trainer_speed_and_heart_rate() {
    let r = [0x02, 0x08, 0x00, 0xE8, 0x03, 0xC8, 0x00, 0x96];
    let v = CrossTrainerData::decode(&r).unwrap();

    assert_eq!(
        v,
        CrossTrainerData {
            instantaneous_speed: Some(Measurement::new(10.0, Unit::KilometersPerHour)),
            average_speed: Some(Measurement::new(2.0, Unit::KilometersPerHour)),
            heart_rate: Some(Measurement::new(150.0, Unit::BeatsPerMinute)),
            ..Default::default()
        }
    );
    assert_eq!(v.movement_direction, MovementDirection::Forward);
    assert_eq!(v.encode().unwrap(), r);
}

#[test]
fn cross_trainer_more_data() {
    let r = [0x03, 0x08, 0x00, 0xC8, 0x00, 0x96];
    let v = CrossTrainerData::decode(&r).unwrap();

    assert_eq!(v.instantaneous_speed, None);
    assert_eq!(v.average_speed, Some(Measurement::new(2.0, Unit::KilometersPerHour)));
    assert_eq!(v.heart_rate, Some(Measurement::new(150.0, Unit::BeatsPerMinute)));
}

#[test]
fn more_data_skips_leading_fields() {
    let mut r: ArrayVec<[u8; 16]> = ArrayVec::new();
    r.extend_from_slice(&[0x00, 0x00, 0x00, 0xE8, 0x03]);

    let with_speed = consumed(&cross_trainer::SCHEMA, &r);
    r[0] = 0x01;
    let without_speed = consumed(&cross_trainer::SCHEMA, &r);

    assert_eq!(with_speed, 5);
    assert_eq!(with_speed - without_speed, 2);

    let r = [0x00, 0x00, 0x0C, 0x00, 0x54, 0x01];
    assert_eq!(consumed(&step_climber::SCHEMA, &r), 6);
    assert_eq!(consumed(&step_climber::SCHEMA, &[0x01, 0x00]), 2);
}

#[test]
fn cross_trainer_direction_and_reserved_bits() {
    let v = CrossTrainerData::decode(&[0x01, 0x80, 0xFF]).unwrap();

    assert_eq!(
        v,
        CrossTrainerData {
            movement_direction: MovementDirection::Backward,
            ..Default::default()
        }
    );
    assert_eq!(v.encode().unwrap(), [0x01, 0x80, 0x00]);
}

#[test]
fn cross_trainer_scaled_fields() {
    let r = [0x11, 0x00, 0x00, 0x7B, 0x00];
    let v = CrossTrainerData::decode(&r).unwrap();
    assert_eq!(v.stride_count, Some(12.3));

    let r = [0x41, 0x00, 0x00, 0xE7, 0xFF, 0xFF, 0x7F];
    let v = CrossTrainerData::decode(&r).unwrap();
    assert_eq!(v.inclination, Some(Measurement::new(-2.5, Unit::Percent)));
    assert_eq!(v.ramp_angle, None);
}

#[test]
fn cross_trainer_partial_energy() {
    let v = CrossTrainerData {
        energy: Energy {
            total: Some(Measurement::new(300.0, Unit::Kilocalories)),
            ..Default::default()
        },
        ..Default::default()
    };

    let r = v.encode().unwrap();
    assert_eq!(r, [0x01, 0x04, 0x00, 0x2C, 0x01, 0xFF, 0xFF, 0xFF]);
    assert_eq!(CrossTrainerData::decode(&r).unwrap(), v);
}

#[test]
fn short_buffer() {
    assert_eq!(
        CrossTrainerData::decode(&[0x02, 0x08, 0x00, 0xE8]),
        Err(Error::Parse(ParseError::EndOfBuffer {
            needed: 2,
            remaining: 1
        }))
    );
    assert_eq!(
        CrossTrainerData::decode(&[]),
        Err(Error::Parse(ParseError::EndOfBuffer {
            needed: 3,
            remaining: 0
        }))
    );
    assert!(matches!(
        ObjectSize::decode(&[0x00; 7]),
        Err(Error::Parse(ParseError::EndOfBuffer { .. }))
    ));
    assert!(HttpsSecurity::decode(&[]).is_err());
}

#[test]
fn step_climber_unavailable_rate() {
    let v = StepClimberData::decode(&[0x03, 0x00, 0xFF, 0xFF]).unwrap();

    assert_eq!(v.steps_per_minute, None);
    assert_eq!(v.floors, None);
    assert_eq!(v.step_count, None);

    let v = StepClimberData::decode(&[0x02, 0x00, 0x01, 0x00, 0x02, 0x00, 0xFF, 0xFF]).unwrap();

    assert_eq!(v.floors, Some(1));
    assert_eq!(v.step_count, Some(2));
    assert_eq!(v.steps_per_minute, None);
}

#[test]
fn step_climber_session() {
    let r = [0xE0, 0x00, 0x0C, 0x00, 0x54, 0x01, 0x78, 0x2D, 0x58, 0x02];
    let v = StepClimberData::decode(&r).unwrap();

    assert_eq!(
        v,
        StepClimberData {
            floors: Some(12),
            step_count: Some(340),
            heart_rate: Some(Measurement::new(120.0, Unit::BeatsPerMinute)),
            metabolic_equivalent: Some(4.5),
            time: Time {
                elapsed: Some(Measurement::new(600.0, Unit::Seconds)),
                remaining: None,
            },
            ..Default::default()
        }
    );
    assert_eq!(v.encode().unwrap(), r);
}

#[test]
fn treadmill_distance_and_power() {
    let r = [0x05, 0x10, 0x70, 0x11, 0x01, 0xF6, 0xFF, 0x96, 0x00];
    let v = TreadmillData::decode(&r).unwrap();

    assert_eq!(v.total_distance, Some(Measurement::new(70000.0, Unit::Meters)));
    assert_eq!(v.force_on_belt, Some(Measurement::new(-10.0, Unit::Newtons)));
    assert_eq!(v.power_output, Some(Measurement::new(150.0, Unit::Watts)));
    assert_eq!(v.encode().unwrap(), r);
}

#[test]
fn invalid_values() {
    let v = CrossTrainerData {
        positive_elevation_gain: Some(Measurement::new(10.0, Unit::Meters)),
        ..Default::default()
    };
    assert_eq!(
        v.encode(),
        Err(Error::InvalidValue {
            field: "negative_elevation_gain"
        })
    );

    let v = CrossTrainerData {
        average_speed: Some(Measurement::new(2.0, Unit::Meters)),
        ..Default::default()
    };
    assert_eq!(v.encode(), Err(Error::InvalidValue { field: "average_speed" }));

    let v = CrossTrainerData {
        heart_rate: Some(Measurement::new(300.0, Unit::BeatsPerMinute)),
        ..Default::default()
    };
    assert_eq!(v.encode(), Err(Error::InvalidValue { field: "heart_rate" }));

    let v = CrossTrainerData {
        average_speed: Some(Measurement::new(2.005, Unit::KilometersPerHour)),
        ..Default::default()
    };
    assert_eq!(v.encode(), Err(Error::InvalidValue { field: "average_speed" }));

    let v = CrossTrainerData {
        stride_count: Some(0.07),
        ..Default::default()
    };
    assert_eq!(v.encode(), Err(Error::InvalidValue { field: "stride_count" }));

    let v = StepClimberData {
        floors: Some(3),
        ..Default::default()
    };
    assert_eq!(v.encode(), Err(Error::InvalidValue { field: "step_count" }));

    let v = StepClimberData {
        steps_per_minute: Some(Measurement::new(65535.0, Unit::StepsPerMinute)),
        ..Default::default()
    };
    assert_eq!(
        v.encode(),
        Err(Error::InvalidValue {
            field: "steps_per_minute"
        })
    );

    let v = StepClimberData {
        metabolic_equivalent: Some(f64::NAN),
        ..Default::default()
    };
    assert_eq!(
        v.encode(),
        Err(Error::InvalidValue {
            field: "metabolic_equivalent"
        })
    );
}

#[test]
fn current_time() {
    let v = CurrentTime {
        current_time: DateTime {
            year: 2020,
            month: Month::January,
            day: 1,
            hours: 1,
            minutes: 1,
            seconds: 1,
        },
        day_of_week: DayOfWeek::Monday,
        fractional_seconds: 0,
        adjustment_reason: AdjustmentReason {
            manual_time_update: true,
            ..Default::default()
        },
    };

    let r = v.encode().unwrap();
    assert_eq!(r, [0xE4, 0x07, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x01]);
    assert_eq!(CurrentTime::decode(&r), Ok(v));

    let v = CurrentTime::decode(&[0x00, 0x00, 0x00, 0x00, 0x17, 0x3B, 0x3B, 0x07, 0x80, 0x0C]).unwrap();
    assert_eq!(v.current_time.month, Month::Unknown);
    assert_eq!(v.current_time.hours, 23);
    assert_eq!(v.day_of_week, DayOfWeek::Sunday);
    assert_eq!(v.fractional_seconds, 0x80);
    assert_eq!(
        v.adjustment_reason,
        AdjustmentReason {
            time_zone_change: true,
            daylight_savings_change: true,
            ..Default::default()
        }
    );
}

#[test]
fn current_time_unrecognized_values() {
    let r = [0xE4, 0x07, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x01];
    assert_eq!(CurrentTime::decode(&r), Err(Error::InvalidValue { field: "month" }));

    let r = [0xE4, 0x07, 0x01, 0x01, 0x01, 0x01, 0x01, 0x08, 0x00, 0x01];
    assert_eq!(
        CurrentTime::decode(&r),
        Err(Error::InvalidValue {
            field: "day_of_week"
        })
    );

    let r = [0xE4, 0x07, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x10];
    assert_eq!(
        CurrentTime::decode(&r),
        Err(Error::InvalidValue {
            field: "adjustment_reason"
        })
    );

    assert_eq!(
        CurrentTime::decode(&r[..9]),
        Err(Error::Parse(ParseError::EndOfBuffer {
            needed: 10,
            remaining: 9
        }))
    );
}

#[test]
fn https_security() {
    assert_eq!(HttpsSecurity::decode(&[0x01]), Ok(HttpsSecurity { security: true }));
    assert_eq!(HttpsSecurity::decode(&[0x00]), Ok(HttpsSecurity { security: false }));
    assert_eq!(HttpsSecurity::decode(&[0x02]), Ok(HttpsSecurity { security: true }));
    assert_eq!(HttpsSecurity { security: true }.encode().unwrap(), [0x01]);
}

#[test]
fn object_size() {
    let v = ObjectSize {
        current_size: 100,
        allocated_size: 200,
    };
    let r = v.encode().unwrap();

    assert_eq!(r, [0x64, 0x00, 0x00, 0x00, 0xC8, 0x00, 0x00, 0x00]);
    assert_eq!(ObjectSize::decode(&r), Ok(v));
}

#[test]
fn revision_string() {
    let v = SoftwareRevisionString::decode(b"1.2.3\0\0").unwrap();
    assert_eq!(v.revision, "1.2.3");

    let v = SoftwareRevisionString::decode(&[0xFF, 0xFE]).unwrap();
    assert_eq!(v.revision, "");

    assert_eq!(v.encode(), Err(Error::Unsupported));
}

#[test]
fn single_field_values() {
    let v = UvIndex::decode(&[0x07]).unwrap();
    assert_eq!(v.uv_index, 7);
    assert_eq!(v.encode().unwrap(), [0x07]);

    let v = TxPowerLevel::decode(&[0xF4]).unwrap();
    assert_eq!(v.power_level, -12);
    assert_eq!(v.measurement().to_string(), "-12 dBm");
    assert_eq!(v.encode().unwrap(), [0xF4]);
}

#[test]
fn registry_lookup() {
    let r = [0x02, 0x08, 0x00, 0xE8, 0x03, 0xC8, 0x00, 0x96];
    let v = registry::decode("2ace", &r).unwrap().unwrap();

    assert!(matches!(v, AnyCharacteristic::CrossTrainerData(_)));
    assert_eq!(v.name(), "Cross Trainer Data");
    assert_eq!(v.uuid(), "2ACE");
    assert_eq!(v.encode().unwrap(), r);

    assert_eq!(registry::decode("FFFF", &r), Ok(None));

    let r = [0xE4, 0x07, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x01];
    let v = registry::decode("2a2b", &r).unwrap().unwrap();
    assert_eq!(v.name(), "Current Time");
    assert_eq!(v.encode().unwrap(), r);
    assert_eq!(registry::name("2a28"), Some("Software Revision String"));
    assert_eq!(registry::name("FFFF"), None);
    assert_eq!(registry::schema("2ACF"), Some(&step_climber::SCHEMA));
    assert_eq!(registry::schema("2ABB"), None);

    let v = AnyCharacteristic::from(HttpsSecurity { security: false });
    assert_eq!(v.encode().unwrap(), [0x00]);
    assert_eq!(
        AnyCharacteristic::from(SoftwareRevisionString::default()).encode(),
        Err(Error::Unsupported)
    );
}

#[test]
fn services() {
    let s = service::lookup("180a").unwrap();
    assert_eq!(s, &service::DEVICE_INFORMATION);
    assert_eq!(s.uniform_identifier, "org.bluetooth.service.device_information");
    assert_eq!(service::lookup("0000"), None);
    assert_eq!(service::lookup("1805"), Some(&service::CURRENT_TIME));

    for s in service::SERVICES {
        for uuid in s.characteristics {
            assert!(registry::name(uuid).is_some(), "{}: {uuid}", s.name);
        }
    }
}

#[test]
fn measurement_arithmetic() {
    let a = Measurement::new(2.5, Unit::KilometersPerHour);
    let b = Measurement::new(1.5, Unit::KilometersPerHour);

    assert_eq!(a.to_string(), "2.5 km/h");
    assert_eq!(a.checked_add(b), Some(Measurement::new(4.0, Unit::KilometersPerHour)));
    assert_eq!(a.checked_sub(Measurement::new(1.0, Unit::Meters)), None);
    assert_eq!((a * 2.0).value(), 5.0);
    assert_eq!((a / 2.0).value(), 1.25);
}
