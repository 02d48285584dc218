//! Built-in rule table, tips, and canned replies.
//!
//! Rule order matters: when a message matches several rules, the earlier
//! rule answers.

/// Exact (case-insensitive) input that asks for a random tip.
pub const TIP_TOKEN: &str = "tip";

pub const GREETING: &str = "Hello! I'm your health assistant. Ask me any health-related questions or type 'tip' for a random health tip.";

pub const FALLBACK: &str = "I'm happy to provide general health information, but for specific medical advice, please consult with a healthcare professional. Is there a particular health topic you'd like to learn more about?";

/// `(keywords, response)` in priority order.
pub const RULES: &[(&[&str], &str)] = &[
    (
        &["diabetes", "blood sugar"],
        "Diabetes management involves monitoring blood glucose levels, maintaining a balanced diet low in simple carbohydrates, regular physical activity, and taking prescribed medications. Regular check-ups with your healthcare provider are essential.",
    ),
    (
        &["exercise", "workout"],
        "The American Heart Association recommends at least 150 minutes of moderate-intensity aerobic activity or 75 minutes of vigorous activity per week, plus muscle-strengthening activities at least twice a week. Always start gradually if you're new to exercise.",
    ),
    (
        &["diet", "nutrition", "food"],
        "A balanced diet should include a variety of fruits, vegetables, whole grains, lean proteins, and healthy fats. Try to limit processed foods, added sugars, and excessive salt. Consider consulting with a nutritionist for personalized dietary advice.",
    ),
    (
        &["sleep", "insomnia"],
        "Good sleep hygiene includes maintaining a regular sleep schedule, creating a restful environment, limiting screen time before bed, and avoiding caffeine and large meals close to bedtime. Adults typically need 7-9 hours of quality sleep per night.",
    ),
    (
        &["stress", "anxiety"],
        "Stress management techniques include deep breathing exercises, meditation, physical activity, adequate sleep, and maintaining social connections. If stress is significantly affecting your daily life, consider speaking with a mental health professional.",
    ),
    (
        &["headache", "migraine"],
        "Headaches can be caused by dehydration, stress, lack of sleep, or underlying health conditions. For occasional headaches, rest, hydration, and over-the-counter pain relievers may help. If headaches are severe or frequent, consult a healthcare provider.",
    ),
    (
        &["vitamin", "supplement"],
        "While a balanced diet should provide most needed nutrients, some people may benefit from supplements. Vitamin D, B12, and omega-3 are common supplements. Always consult with a healthcare provider before starting any new supplement.",
    ),
    (
        &["covid", "coronavirus"],
        "COVID-19 preventive measures include vaccination, hand hygiene, wearing masks in crowded indoor settings, and staying home when sick. If you experience symptoms, consider testing and follow local health guidelines.",
    ),
    (
        &["heart", "cardiovascular"],
        "Heart health can be maintained through regular exercise, a diet low in saturated fats and sodium, not smoking, limiting alcohol, and managing stress. Regular blood pressure and cholesterol checks are important preventive measures.",
    ),
];

pub const TIPS: &[&str] = &[
    "Stay hydrated by drinking at least 8 glasses of water daily.",
    "Aim for 7-9 hours of quality sleep each night for optimal health.",
    "Include a variety of colorful vegetables in your diet for essential nutrients.",
    "Regular physical activity can help reduce the risk of chronic diseases.",
    "Practice mindfulness or meditation to reduce stress levels.",
    "Limit processed foods and added sugars in your diet.",
    "Take short breaks during work to reduce eye strain and mental fatigue.",
    "Regular check-ups with your doctor can help detect health issues early.",
    "Remember to maintain good posture when sitting for long periods.",
    "Consider adding omega-3 rich foods like fish, flaxseeds, and walnuts to your diet.",
];
