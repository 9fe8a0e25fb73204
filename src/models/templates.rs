//! Workout-day template catalog.
//!
//! Static reference data: four fixed day templates, each listing the
//! exercises that belong to it. The core only ever consumes this as a
//! key → display-name lookup, so the catalog is built once at startup and
//! passed around by shared reference. There is no mutation after build.

pub struct Exercise {
    pub exercise_key: &'static str,
    pub exercise_name: &'static str,
}

pub struct WorkoutTemplate {
    pub day_key: &'static str,
    pub day_name: &'static str,
    pub exercises: &'static [Exercise],
}

macro_rules! exercises {
    ($(($key:literal, $name:literal)),* $(,)?) => {
        &[$(Exercise { exercise_key: $key, exercise_name: $name }),*]
    };
}

static UPPER_A: WorkoutTemplate = WorkoutTemplate {
    day_key: "upper_a",
    day_name: "Upper A",
    exercises: exercises![
        ("dumbbell_bench_press", "Dumbbell Bench Press"),
        ("barbell_bench", "Barbell Bench"),
        ("smith_flat_press", "Smith Flat Press"),
        ("vertical_pull", "Vertical Pull"),
        ("wide_grip_lat_pulldown", "Wide Grip Lat Pulldown"),
        ("neutral_grip_pulldown", "Neutral Grip Pulldown"),
        ("stable_shoulder_press", "Stable Shoulder Press"),
        ("smith_machine_shoulder_press", "Smith Machine Shoulder Press"),
        ("shoulder_press_machine", "Shoulder Press Machine"),
        ("landmine_press", "Landmine Press"),
        ("horizontal_row", "Horizontal Row"),
        ("plate_loaded_seated_row", "Alternating Plate-Loaded Seated Row"),
        ("chest_supported_machine_row", "Chest-Supported Machine Row"),
        ("push_ups", "Push-Ups"),
        ("push_ups_standard", "Push-Ups Standard"),
        ("push_ups_decline", "Push-Ups Decline"),
        ("push_ups_weighted", "Push-Ups Weighted"),
        ("cable_face_pulls", "Cable Face Pulls"),
        ("rope_face_pull", "Rope Face Pull"),
        ("rear_delt_cable_fly", "Rear Delt Cable Fly"),
        ("lateral_raise", "Lateral Raise"),
        ("lateral_raise_machine", "Lateral Raise Machine"),
        ("cable_lateral_raise", "Cable Lateral Raise"),
        ("cable_crunches", "Cable Crunches"),
        ("machine_crunch", "Machine Crunch"),
        ("leg_raises", "Leg Raises"),
        ("biceps_isolation", "Biceps Isolation"),
        ("triceps_isolation", "Triceps Isolation"),
        ("captains_chair", "Captain's Chair"),
    ],
};

static LOWER_A: WorkoutTemplate = WorkoutTemplate {
    day_key: "lower_a",
    day_name: "Lower A",
    exercises: exercises![
        ("hex_bar_deadlift", "Hex Bar Deadlift"),
        ("trap_bar_high_handle", "Trap Bar High Handle"),
        ("rdl", "RDL"),
        ("bulgarian_split_squat", "Bulgarian Split Squat"),
        ("bss_smith_machine", "Bulgarian Split Squat (Smith Machine)"),
        ("bss_dbs", "Bulgarian Split Squat (DBs)"),
        ("bss_front_foot_elevated", "Bulgarian Split Squat (Front-Foot Elevated)"),
        ("hamstring_curl", "Hamstring Curl"),
        ("hamstring_curl_seated", "Hamstring Curl (Seated)"),
        ("hamstring_curl_prone", "Hamstring Curl (Prone)"),
        ("leg_extension", "Leg Extension (Optional)"),
        ("hip_abduction", "Hip Abduction Machine"),
        ("cable_abduction", "Cable Abduction"),
        ("cable_crunches", "Cable Crunches"),
    ],
};

static UPPER_B: WorkoutTemplate = WorkoutTemplate {
    day_key: "upper_b",
    day_name: "Upper B",
    exercises: exercises![
        ("lat_pulldown", "Primary Lat Pulldown (Heavier)"),
        ("lat_pulldown_wide_grip", "Lat Pulldown Wide Grip"),
        ("lat_pulldown_mag_bar", "Lat Pulldown MAG Bar"),
        ("lat_pulldown_neutral_grip", "Lat Pulldown Neutral Grip"),
        ("incline_press", "Incline Press"),
        ("smith_incline_press", "Smith Incline Press"),
        ("plate_loaded_incline_press", "Plate-Loaded Incline Press"),
        ("cable_press_fly", "High-to-Low Cable Press / Fly"),
        ("cable_press", "Cable Press"),
        ("cable_fly", "Cable Fly"),
        ("horizontal_row", "Horizontal Row"),
        ("plate_loaded_seated_row", "Alternating Plate-Loaded Seated Row"),
        ("chest_supported_row", "Chest-Supported Row"),
        ("push_ups", "Push-Ups"),
        ("push_ups_standard", "Push-Ups Standard"),
        ("push_ups_decline", "Push-Ups Decline"),
        ("triceps_isolation", "Triceps Isolation"),
        ("cable_pushdown", "Cable Pushdown"),
        ("overhead_cable_extension", "Overhead Cable Extension"),
        ("biceps_isolation", "Biceps Isolation"),
        ("ez_bar_cable_curl", "EZ-Bar Cable Curl"),
        ("straight_bar_curl", "Straight Bar Curl"),
        ("bicycle_kicks", "Bicycle Kicks"),
        ("dead_bugs", "Dead Bugs"),
        ("cable_crunches", "Cable Crunches"),
    ],
};

static LOWER_B: WorkoutTemplate = WorkoutTemplate {
    day_key: "lower_b",
    day_name: "Lower B",
    exercises: exercises![
        ("hip_thrust", "Hip Thrust Machine"),
        ("barbell_hip_thrust", "Barbell Hip Thrust"),
        ("smith_hip_thrust", "Smith Hip Thrust"),
        ("leg_extension", "Leg Extension"),
        ("hamstring_curl", "Hamstring Curl"),
        ("hamstring_curl_seated", "Hamstring Curl (Seated)"),
        ("hamstring_curl_prone", "Hamstring Curl (Prone)"),
        ("bulgarian_split_squat", "Bulgarian Split Squat"),
        ("bss_smith", "Bulgarian Split Squat (Smith)"),
        ("bss_db", "Bulgarian Split Squat (DB)"),
        ("bss_forward_torso", "Bulgarian Split Squat (Slight forward torso)"),
        ("pallof_press", "Tall Kneeling Pallof Press (Cable)"),
        ("straight_leg_lowers", "Straight Leg Lowers w/ Overhead DB"),
        ("reverse_crunch", "Reverse Crunch"),
    ],
};

/// Read-only key → name lookup over the built-in templates.
pub struct Catalog {
    days: &'static [&'static WorkoutTemplate],
}

impl Catalog {
    pub fn builtin() -> Self {
        static DAYS: [&WorkoutTemplate; 4] = [&UPPER_A, &LOWER_A, &UPPER_B, &LOWER_B];
        Self { days: &DAYS }
    }

    pub fn days(&self) -> &[&'static WorkoutTemplate] {
        self.days
    }

    pub fn template(&self, day_key: &str) -> Option<&'static WorkoutTemplate> {
        self.days.iter().copied().find(|t| t.day_key == day_key)
    }

    pub fn is_valid_day(&self, day_key: &str) -> bool {
        self.template(day_key).is_some()
    }

    /// Display name for a day key, humanized fallback when unknown.
    pub fn day_name(&self, day_key: &str) -> String {
        match self.template(day_key) {
            Some(t) => t.day_name.to_string(),
            None => humanize_key(day_key),
        }
    }

    /// Display name for an exercise key, searched across every day.
    /// Falls back to a human-readable form of the key when unresolved.
    pub fn exercise_name(&self, exercise_key: &str) -> String {
        for day in self.days {
            if let Some(ex) = day.exercises.iter().find(|e| e.exercise_key == exercise_key) {
                return ex.exercise_name.to_string();
            }
        }
        humanize_key(exercise_key)
    }
}

/// "bench_press" → "Bench Press"
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
