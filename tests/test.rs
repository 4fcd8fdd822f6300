use gpio_calc::{
    build_command, convert_backward, convert_forward, decode, encode, Calculator, DescriptorFields,
    Direction, ExportMode, Field, GpioCalcError, GpioNumber, PinDescriptor, Port, SocFamily,
};

fn port(letter: char) -> Port {
    Port::from_letter(letter).unwrap()
}

#[test]
fn test_forward_examples() {
    let rk = DescriptorFields::new("GPIO1", "B", "3");
    let imx = DescriptorFields::new("GPIO5", "", "10");
    let sunxi = DescriptorFields::new("", "C", "7");

    assert_eq!(convert_forward(SocFamily::Rk, &rk).unwrap().value(), 43);
    assert_eq!(convert_forward(SocFamily::Imx, &imx).unwrap().value(), 138);
    let gpio = convert_forward(SocFamily::Sunxi, &sunxi).unwrap();
    assert_eq!(gpio.value(), 71);
}

#[test]
fn test_backward_examples() {
    assert_eq!(
        convert_backward(SocFamily::Rk, "43").unwrap(),
        PinDescriptor::Rk {
            group: 1,
            port: port('B'),
            index: 3
        }
    );
    assert_eq!(
        convert_backward(SocFamily::Imx, "138").unwrap(),
        PinDescriptor::Imx {
            group: 5,
            index: 10
        }
    );
    assert_eq!(
        convert_backward(SocFamily::Sunxi, "71").unwrap(),
        PinDescriptor::Sunxi {
            port: port('C'),
            index: 7
        }
    );
}

#[test]
fn test_pin_names() {
    let samples = [
        (SocFamily::Rk, 43),
        (SocFamily::Imx, 138),
        (SocFamily::Sunxi, 71),
    ];
    let names: Vec<String> = samples
        .iter()
        .map(|(family, n)| decode(*family, *n).unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["GPIO1_B3", "GPIO5_IO10", "PC7"]);
}

#[test]
fn test_round_trip_first_256_numbers() {
    for family in SocFamily::ALL {
        for n in 0..256 {
            let descriptor = decode(family, n).unwrap();
            let gpio = encode(family, &descriptor).unwrap();
            assert_eq!(gpio.value(), n as u64, "{}", family);
        }
    }
}

#[test]
fn test_large_numbers_decode() {
    let imx = decode(SocFamily::Imx, 5_000_000_000).unwrap();
    assert_eq!(imx.to_string(), "GPIO156250001_IO00");

    let sunxi = convert_backward(SocFamily::Sunxi, "4294967296").unwrap();
    assert_eq!(sunxi.to_string(), "P[134217728]0");
}

#[test]
fn test_invalid_inputs() {
    let bad_port = PinDescriptor::Rk {
        group: 1,
        port: port('Z'),
        index: 3,
    };
    assert!(matches!(
        encode(SocFamily::Rk, &bad_port),
        Err(GpioCalcError::InvalidDescriptor {
            family: SocFamily::Rk,
            ..
        })
    ));
    assert!(matches!(
        decode(SocFamily::Imx, -1),
        Err(GpioCalcError::InvalidNumber(_))
    ));
}

#[test]
fn test_error_messages() {
    let fields = DescriptorFields::new("1", "Z", "3");
    let err = convert_forward(SocFamily::Rk, &fields).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid Rockchip pin descriptor: port Z outside A-D"
    );

    let fields = DescriptorFields::new("9", "", "0");
    let err = convert_forward(SocFamily::Imx, &fields).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid i.MX pin descriptor: group 9 outside 1..=8"
    );

    let err = decode(SocFamily::Sunxi, -3).unwrap_err();
    assert_eq!(err.to_string(), "invalid GPIO number: -3 is negative");
}

#[test]
fn test_build_command() {
    let gpio: GpioNumber = "17".parse().unwrap();
    assert_eq!(
        build_command(gpio, ExportMode::ExportHigh),
        "echo 17 > /sys/class/gpio/export\necho high > /sys/class/gpio/gpio17/direction"
    );
}

#[test]
fn test_calculator_session() {
    let mut calc = Calculator::new();
    calc.set_family(SocFamily::Sunxi);
    calc.set_field(Field::Port, "H").unwrap();
    calc.set_field(Field::Index, "4").unwrap();
    calc.set_export_mode(ExportMode::ExportLow);
    assert_eq!(calc.label(), "GPIO = 228");
    assert_eq!(
        calc.command().unwrap(),
        "echo 228 > /sys/class/gpio/export\necho low > /sys/class/gpio/gpio228/direction"
    );

    // typing over the index leaves the result alone until it parses again
    assert!(calc.set_field(Field::Index, "").is_err());
    assert_eq!(calc.result().unwrap().value(), 228);

    calc.set_direction(Direction::Backward);
    calc.set_gpio_number("228").unwrap();
    assert_eq!(calc.label(), "PH4");
    assert_eq!(calc.command().unwrap(), "echo 228 > /sys/class/gpio/export");
}
