//! Built-in catalog inserted on every open. `INSERT OR IGNORE` against the
//! unique columns keeps reseeding a no-op.

pub struct SeedDisease {
  pub name:            &'static str,
  pub description:     &'static str,
  pub causes:          &'static str,
  pub symptoms:        &'static str,
  pub precautions:     &'static str,
  pub home_care:       &'static str,
  pub when_to_consult: &'static str,
  pub emergency_signs: &'static str,
}

/// WHO-aligned records, in store order.
pub const DISEASES: &[SeedDisease] = &[
  SeedDisease {
    name:            "Fever",
    description:     "A temporary increase in your body temperature, often due to \
                      an illness.",
    causes:          "Infections (viral or bacterial), heat exhaustion, certain \
                      inflammatory conditions.",
    symptoms:        "Sweating, chills, headache, muscle aches, loss of appetite, \
                      dehydration, general weakness.",
    precautions:     "Drink plenty of fluids, rest, stay in a cool environment.",
    home_care:       "Use light clothing, lukewarm sponge baths, stay hydrated with \
                      water or ORS.",
    when_to_consult: "If fever exceeds 103°F (39.4°C) or lasts more than 3 days.",
    emergency_signs: "Severe headache, stiff neck, skin rash, mental confusion, \
                      persistent vomiting.",
  },
  SeedDisease {
    name:            "Dengue",
    description:     "A mosquito-borne viral infection common in tropical \
                      climates.",
    causes:          "Dengue virus transmitted by Aedes aegypti mosquitoes.",
    symptoms:        "High fever, severe headache, pain behind eyes, muscle/joint \
                      pains, nausea, rash.",
    precautions:     "Prevent mosquito bites using nets/repellents, remove \
                      standing water around home.",
    home_care:       "Rest, drink plenty of fluids (water, juice, soup), avoid \
                      aspirin/ibuprofen (use paracetamol only if advised).",
    when_to_consult: "Immediately if you live in a dengue-prone area and develop \
                      high fever.",
    emergency_signs: "Severe abdominal pain, persistent vomiting, bleeding gums, \
                      rapid breathing, fatigue/restlessness.",
  },
  SeedDisease {
    name:            "COVID-19",
    description:     "An infectious disease caused by the SARS-CoV-2 virus.",
    causes:          "SARS-CoV-2 virus spread through respiratory droplets.",
    symptoms:        "Fever, cough, tiredness, loss of taste or smell, sore \
                      throat, headache.",
    precautions:     "Wear masks in crowded places, maintain social distance, \
                      wash hands frequently, get vaccinated.",
    home_care:       "Isolate in a well-ventilated room, monitor oxygen levels, \
                      stay hydrated, rest.",
    when_to_consult: "If symptoms worsen or persist beyond a week.",
    emergency_signs: "Difficulty breathing, chest pain, confusion, inability to \
                      wake or stay awake, pale/blue skin.",
  },
];

pub const TIPS: &[&str] = &[
  "Drink at least 8 glasses of water daily to stay hydrated.",
  "Wash your hands with soap for at least 20 seconds before eating.",
  "Include seasonal fruits and vegetables in your diet for better immunity.",
  "Get at least 7-8 hours of sleep to help your body recover and stay healthy.",
  "Exercise for at least 30 minutes a day to improve cardiovascular health.",
];

/// Insert the catalog inside one transaction.
pub fn apply(conn: &mut rusqlite::Connection) -> rusqlite::Result<usize> {
  let tx = conn.transaction()?;
  let mut inserted = 0;
  {
    let mut disease = tx.prepare(
      "INSERT OR IGNORE INTO diseases
         (name, description, causes, symptoms, precautions, home_care,
          when_to_consult, emergency_signs)
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    for d in DISEASES {
      inserted += disease.execute(rusqlite::params![
        d.name,
        d.description,
        d.causes,
        d.symptoms,
        d.precautions,
        d.home_care,
        d.when_to_consult,
        d.emergency_signs,
      ])?;
    }

    let mut tip = tx.prepare("INSERT OR IGNORE INTO health_tips (tip) VALUES (?1)")?;
    for t in TIPS {
      inserted += tip.execute(rusqlite::params![t])?;
    }
  }
  tx.commit()?;
  Ok(inserted)
}
