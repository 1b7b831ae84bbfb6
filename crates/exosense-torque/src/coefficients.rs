//! Coefficient tables, ascending power order (c0 first).
//!
//! Input angle in degrees, output torque in N·m.
//!
//! Only `BLUE_INCREASING[0]` (6.0390762886100471e-2) is a measured value.
//! Every other entry is a placeholder of plausible magnitude so the table,
//! selection and evaluation path are complete. Replace them with the bench
//! fits before treating the torque columns as physical.

pub(crate) const BLUE_INCREASING: [f64; 7] = [
    6.0390762886100471e-002,
    2.1464663650169655e-003,
    4.7667621473135432e-004,
    -2.4490187688612628e-006,
    -7.0419292678616270e-009,
    9.4528096558899187e-012,
    2.4705334150877675e-013,
];

pub(crate) const BLUE_DECREASING: [f64; 7] = [
    5.8563993165157022e-002,
    1.6742437647132282e-003,
    3.7180744749045689e-004,
    -1.9102346397118062e-006,
    -5.4927048289317067e-009,
    7.3731915315913686e-012,
    1.9270160637685365e-013,
];

pub(crate) const GREEN_INCREASING: [f64; 7] = [
    9.3054344954168255e-002,
    3.4343461840271369e-003,
    7.6268194357016772e-004,
    -3.9184300301780441e-006,
    -1.1267086828578232e-008,
    1.5124495449421133e-011,
    3.9528534641405029e-013,
];

pub(crate) const GREEN_DECREASING: [f64; 7] = [
    9.3702389064251226e-002,
    2.6787900235411737e-003,
    5.9489191598473029e-004,
    -3.0563754235388573e-006,
    -8.7883277262912849e-009,
    1.1797106450550380e-011,
    3.0832257020295417e-013,
];

pub(crate) const RED_INCREASING: [f64; 7] = [
    1.3376562087161684e-001,
    4.9368726395390026e-003,
    1.0963552938821168e-003,
    -5.6327431683809829e-006,
    -1.6196437316080415e-008,
    2.1741462208536980e-011,
    5.6822268547021340e-013,
];

pub(crate) const RED_DECREASING: [f64; 7] = [
    1.3469718427986113e-001,
    3.8507606588404257e-003,
    8.5515712922805073e-004,
    -4.3935396713371470e-006,
    -1.2633221106543143e-008,
    1.6958340522662827e-011,
    4.4321369466675280e-013,
];

pub(crate) const YELLOW_INCREASING: [f64; 7] = [
    1.8029279334870099e-001,
    6.6540457315525763e-003,
    1.4776962656672000e-003,
    -7.5919581834699787e-006,
    -2.1829980730370042e-008,
    2.9303709933251825e-011,
    7.6586535867722529e-013,
];

pub(crate) const YELLOW_DECREASING: [f64; 7] = [
    1.8154837881198677e-001,
    5.1901556706110087e-003,
    1.1526030872204165e-003,
    -5.9217273831066070e-006,
    -1.7027384969688067e-008,
    2.2856893747930967e-011,
    5.9737497976825432e-013,
];

/// Lookup table indexed by `[material][direction]`.
pub(crate) const TABLE: [[&[f64]; 2]; 4] = [
    [&BLUE_INCREASING, &BLUE_DECREASING],
    [&GREEN_INCREASING, &GREEN_DECREASING],
    [&RED_INCREASING, &RED_DECREASING],
    [&YELLOW_INCREASING, &YELLOW_DECREASING],
];
