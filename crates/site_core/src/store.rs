//! Hardcoded content. Slice order is display order.
use crate::content::{
    Event, EventCategory, Publication, PublicationKind, Registration, ScheduleItem, Speaker,
    TeamMember, Video, VideoPlatform,
};

/// Linear scan by id; `None` is the not-found outcome.
pub fn find_event(id: &str) -> Option<&'static Event> {
    EVENTS.iter().find(|event| event.id == id)
}

/// Other events of the same category, in store order.
pub fn related_events<'a>(events: &'a [Event], event: &Event, limit: usize) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|other| other.id != event.id && other.category == event.category)
        .take(limit)
        .collect()
}

const fn slot(time: &'static str, activity: &'static str) -> ScheduleItem {
    ScheduleItem { time, activity }
}

const fn speaker(name: &'static str, affiliation: &'static str, topic: &'static str) -> Speaker {
    Speaker {
        name,
        affiliation,
        topic,
    }
}

const fn research(title: &'static str) -> Publication {
    Publication {
        title,
        description: "",
        link: "https://www.researchgate.net/profile/Irawan-Satriotomo",
        kind: PublicationKind::Research,
    }
}

const fn youtube(title: &'static str, id: &'static str) -> Video {
    Video {
        title,
        video_id: Some(id),
        platform: VideoPlatform::Youtube,
    }
}

pub static EVENTS: &[Event] = &[
    Event {
        id: "faons-icn-2022",
        title: "8th Symposium Federation of Asian-Oceanian Neuroscience Societies (FAONS) & 4th Indonesia Conference of Neuroscience (ICN)",
        date: "2022-08-19",
        location: "Virtual (Jakarta Time)",
        description: "Virtual event bringing together experts to discuss implementing basic neuroscience to clinical neuroscience. Includes multiple symposia on topics such as ageing brain, depression, anxiety, schizophrenia, dementia, and more.",
        image_url: "/images/faons_icn_2022.png",
        category: EventCategory::Past,
        full_description: "<p>The 8th Symposium of FAONS and the 4th Indonesia Conference of Neuroscience brought together neuroscience researchers, clinicians, and students from across the Asia-Oceania region.</p>\
<p>The symposium was organized with the Indonesian Neuroscience Society and attracted over 800 participants from 15 countries.</p>",
        schedule: &[
            slot("08:00 - 09:00", "Virtual Registration and Welcome"),
            slot("09:00 - 09:30", "Opening Ceremony"),
            slot("09:30 - 10:30", "Keynote: Implementing Basic Neuroscience to Clinical Practice"),
            slot("10:30 - 11:00", "Break"),
            slot("11:00 - 12:30", "Symposium: Ageing Brain and Neurodegeneration"),
            slot("12:30 - 13:30", "Lunch Break"),
            slot("13:30 - 15:00", "Parallel Sessions: Depression & Anxiety"),
            slot("15:00 - 15:30", "Break"),
            slot("15:30 - 17:00", "Panel: Future of Neuroscience in Asia-Oceania"),
            slot("17:00 - 18:00", "Closing Remarks and Virtual Networking"),
        ],
        speakers: &[
            speaker("Prof. Irawan Satriotomo", "University of Florida & INI", "Translational Neuroscience"),
            speaker("Dr. Kenji Hashimoto", "Chiba University, Japan", "Depression and Neuroplasticity"),
            speaker("Prof. Susan Greenfield", "University of Oxford", "Ageing Brain and Dementia"),
            speaker("Dr. Ahmad Aulia Jusuf", "University of Indonesia", "Clinical Neuroscience Applications"),
        ],
        gallery: &[
            "/images/faons-gallery1.jpg",
            "/images/faons-gallery2.jpg",
            "/images/faons-gallery3.jpg",
        ],
        registration: None,
    },
    Event {
        id: "workshop-lab-animal-2017",
        title: "Workshop Strategi Pengembangan Laboratory Animal Center Berstandar Internasional",
        date: "2017-12-11",
        location: "Universitas YARSI, Cempaka Putih, Jakarta & Animal Lab, Salemba",
        description: "A 2-day workshop on developing an international-standard laboratory animal center, facilitated by experts from University of Florida, Dexa Medica, and IPB.",
        image_url: "/images/workshop_lab_animal_2017.png",
        category: EventCategory::Past,
        full_description: "<p>This intensive 2-day workshop focused on developing an international-standard laboratory animal center.</p>\
<ul><li>International standards for laboratory animal facilities</li><li>Animal welfare and ethical considerations</li><li>Facility design and environmental controls</li><li>Quality assurance and accreditation processes</li></ul>",
        schedule: &[
            slot("Day 1 - 09:00", "Registration and Welcome"),
            slot("Day 1 - 09:30", "International Standards Overview"),
            slot("Day 1 - 11:00", "Facility Design Principles"),
            slot("Day 1 - 14:00", "Animal Welfare Guidelines"),
            slot("Day 1 - 16:00", "Site Visit to Animal Lab, Salemba"),
            slot("Day 2 - 09:00", "Quality Assurance Systems"),
            slot("Day 2 - 11:00", "Staff Training Programs"),
            slot("Day 2 - 14:00", "Regulatory Compliance"),
            slot("Day 2 - 16:00", "Q&A and Closing"),
        ],
        speakers: &[
            speaker("Prof. Irawan Satriotomo", "University of Florida", "International Laboratory Standards"),
            speaker("Dr. Veterinary Expert", "Dexa Medica", "Animal Welfare and Care"),
            speaker("Prof. Animal Science", "IPB University", "Facility Management"),
        ],
        gallery: &[
            "/images/workshop-gallery1.jpg",
            "/images/workshop-gallery2.jpg",
            "/images/workshop-gallery3.jpg",
        ],
        registration: None,
    },
    Event {
        id: "workshop-publikasi-2017",
        title: "Workshop Kiat Sukses Publikasi di Jurnal Internasional Bereputasi",
        date: "2017-12-13",
        location: "Universitas YARSI, Cempaka Putih, Jakarta",
        description: "A workshop on successful strategies for publishing in reputable international journals, facilitated by Irawan Satriotomo, M.D., Ph.D.",
        image_url: "/images/workshop_publikasi_2017.png",
        category: EventCategory::Past,
        full_description: "<p>This workshop gave researchers practical strategies for publishing in reputable international journals.</p>\
<ul><li>Understanding journal selection criteria and impact factors</li><li>Manuscript structure and scientific writing</li><li>Peer review and responding to reviewer comments</li><li>Ethical considerations in scientific publishing</li></ul>",
        schedule: &[
            slot("09:00 - 09:30", "Registration and Welcome"),
            slot("09:30 - 10:30", "Journal Selection Strategies"),
            slot("11:00 - 12:30", "Scientific Writing Excellence"),
            slot("13:30 - 15:00", "Peer Review Process"),
            slot("15:30 - 17:00", "Q&A and Individual Consultations"),
        ],
        speakers: &[speaker(
            "Dr. Irawan Satriotomo",
            "University of Florida & INI",
            "International Publishing Strategies",
        )],
        gallery: &["/images/publikasi-gallery1.jpg", "/images/publikasi-gallery2.jpg"],
        registration: None,
    },
    Event {
        id: "epilepsy-101-2018",
        title: "Epilepsy 101: Diagnosis dan Tatalaksana Epilepsi",
        date: "2018-09-03",
        location: "Auditorium FK UIN Syarif Hidayatullah, Tangerang Selatan, Banten",
        description: "A seminar covering modern perspectives on epilepsy, its diagnosis and treatment, with multiple sessions and expert speakers from various fields.",
        image_url: "/images/epilepsy_101_2018.png",
        category: EventCategory::Past,
        full_description: "<p>Epilepsy 101 was an educational seminar on up-to-date epilepsy diagnosis and management for healthcare professionals, students, and the public.</p>\
<ul><li>Modern understanding of epilepsy pathophysiology</li><li>Diagnostic approaches and EEG interpretation</li><li>Surgical interventions for refractory epilepsy</li><li>Psychosocial aspects of living with epilepsy</li></ul>",
        schedule: &[
            slot("08:00 - 09:00", "Registration"),
            slot("09:00 - 09:30", "Opening and Introduction"),
            slot("09:30 - 10:30", "Epilepsy Pathophysiology"),
            slot("11:00 - 12:00", "Diagnostic Approaches"),
            slot("13:00 - 14:00", "Treatment Strategies"),
            slot("14:00 - 15:00", "Surgical Options"),
            slot("15:30 - 16:30", "Patient Care and Counseling"),
            slot("16:30 - 17:00", "Q&A and Closing"),
        ],
        speakers: &[
            speaker("Dr. Neurologist", "RSCM Jakarta", "Epilepsy Diagnosis"),
            speaker("Dr. Neurosurgeon", "RS Fatmawati", "Surgical Treatment"),
        ],
        gallery: &["/images/epilepsy-gallery1.jpg", "/images/epilepsy-gallery2.jpg"],
        registration: None,
    },
    Event {
        id: "workshop-neuroscience-2019",
        title: "Workshop Neuroscience: From Basic to Clinical",
        date: "2019-11-16",
        location: "Universitas YARSI, Cempaka Putih, Jakarta",
        description: "A comprehensive workshop bridging basic neuroscience research with clinical applications, featuring expert speakers and hands-on sessions.",
        image_url: "/images/workshop_neuroscience_2019.png",
        category: EventCategory::Past,
        full_description: "<p>This workshop bridged basic neuroscience research and its clinical applications.</p>\
<ul><li>Neuroanatomy and neurophysiology</li><li>Neurodevelopment and neuroplasticity</li><li>Neurodegenerative diseases</li><li>Research methodologies in neuroscience</li></ul>",
        schedule: &[
            slot("08:30 - 09:00", "Registration"),
            slot("09:00 - 09:30", "Opening Ceremony"),
            slot("09:30 - 10:30", "Basic Neuroscience Principles"),
            slot("11:00 - 12:00", "Neuroanatomy Overview"),
            slot("13:00 - 14:00", "Clinical Applications"),
            slot("14:00 - 15:00", "Research Methodologies"),
            slot("15:30 - 16:30", "Case Studies and Discussion"),
            slot("16:30 - 17:00", "Closing and Networking"),
        ],
        speakers: &[
            speaker("Prof. Neuroscience Expert", "University of Indonesia", "Basic Neuroscience"),
            speaker("Dr. Clinical Neurologist", "RSCM Jakarta", "Clinical Applications"),
        ],
        gallery: &[
            "/images/neuroscience-workshop-gallery1.jpg",
            "/images/neuroscience-workshop-gallery2.jpg",
        ],
        registration: None,
    },
    Event {
        id: "seminar-stroke-2020",
        title: "Seminar Stroke: Prevention and Management",
        date: "2020-02-15",
        location: "Virtual Event (Online)",
        description: "An online seminar focusing on stroke prevention strategies and modern management approaches, adapted for the digital format during the pandemic.",
        image_url: "/images/seminar_stroke_2020.png",
        category: EventCategory::Past,
        full_description: "<p>An online seminar on stroke prevention and modern management approaches.</p>\
<ul><li>Stroke epidemiology and risk factors</li><li>Acute stroke management and treatment protocols</li><li>Rehabilitation and recovery approaches</li><li>Telemedicine applications in stroke care</li></ul>",
        schedule: &[
            slot("09:00 - 09:15", "Virtual Check-in and Welcome"),
            slot("09:15 - 10:00", "Stroke Epidemiology"),
            slot("10:15 - 11:00", "Prevention Strategies"),
            slot("11:15 - 12:00", "Acute Management"),
            slot("13:00 - 13:45", "Rehabilitation Approaches"),
            slot("14:00 - 14:45", "Community Education"),
            slot("14:45 - 15:30", "Q&A and Closing"),
        ],
        speakers: &[
            speaker("Dr. Stroke Specialist", "RS Cipto Mangunkusumo", "Stroke Management"),
            speaker("Prof. Rehabilitation Medicine", "University of Indonesia", "Stroke Rehabilitation"),
        ],
        gallery: &[
            "/images/stroke-seminar-gallery1.jpg",
            "/images/stroke-seminar-gallery2.jpg",
        ],
        registration: None,
    },
    Event {
        id: "brain-awareness-week-2024",
        title: "Brain Awareness Week 2024",
        date: "2024-03-10",
        location: "Multiple Locations, Indonesia",
        description: "A week-long celebration of the brain, featuring public lectures, workshops, and interactive exhibits designed to promote public awareness about brain research.",
        image_url: "/images/event2.jpg",
        category: EventCategory::Present,
        full_description: "<p>A week-long celebration of the brain with events across Indonesia.</p>\
<ul><li>Public lectures on brain health and neuroscience research</li><li>Interactive brain exhibits in public spaces</li><li>School visits by neuroscientists</li><li>Workshops on brain-healthy lifestyles</li></ul>",
        schedule: &[
            slot("March 10", "Opening Ceremony and Public Lecture at National Museum"),
            slot("March 11-12", "School Visits Program in Jakarta"),
            slot("March 13-14", "Brain Health Workshops at Community Centers"),
            slot("March 15", "Neuroscience and Art Exhibition Opening"),
            slot("March 16-17", "Weekend Brain Fair at Central Park Mall"),
        ],
        speakers: &[
            speaker("Prof. Budi Santoso", "Universitas Gadjah Mada", "Brain Health Across the Lifespan"),
            speaker("Dr. Lisa Chen", "National University of Singapore", "Learning and Memory"),
            speaker("Dr. Andi Wijaya", "Indonesian Brain Foundation", "Brain Injury Prevention"),
        ],
        gallery: &["/images/event2-gallery1.jpg", "/images/event2-gallery2.jpg"],
        registration: None,
    },
    Event {
        id: "neuroscience-research-workshop",
        title: "Neuroscience Research Methods Workshop",
        date: "2024-05-20",
        location: "University of Indonesia, Jakarta",
        description: "An intensive workshop on advanced research methods in neuroscience, including hands-on training with cutting-edge equipment and techniques.",
        image_url: "/images/event3.jpg",
        category: EventCategory::Future,
        full_description: "<p>An intensive three-day workshop on advanced research methods in neuroscience.</p>\
<ul><li>Advanced neuroimaging techniques (fMRI, EEG, MEG)</li><li>Cellular and molecular methods</li><li>Computational approaches to neural data analysis</li><li>Grant writing and research funding strategies</li></ul>",
        schedule: &[
            slot("Day 1 - Morning", "Introduction to Advanced Neuroimaging"),
            slot("Day 1 - Afternoon", "Hands-on fMRI Data Collection and Analysis"),
            slot("Day 2 - Morning", "Cellular and Molecular Methods"),
            slot("Day 2 - Afternoon", "Lab Practicum: Single-Cell Recording"),
            slot("Day 3 - Morning", "Computational Neuroscience Approaches"),
            slot("Day 3 - Afternoon", "Research Ethics and Grant Writing Workshop"),
        ],
        speakers: &[
            speaker("Prof. David Lee", "Stanford University", "Neuroimaging Methods"),
            speaker("Dr. Siti Aminah", "University of Indonesia", "Cellular Neuroscience"),
            speaker("Dr. Michael Wong", "MIT", "Computational Neuroscience"),
        ],
        gallery: &[],
        registration: Some(Registration {
            deadline: "2024-04-30",
            fee: "$250 (Students: $150)",
            link: "https://example.com/register",
            limited_spots: Some(50),
        }),
    },
    Event {
        id: "stroke-awareness-day",
        title: "National Stroke Awareness Day",
        date: "2023-10-29",
        location: "Bandung, Indonesia",
        description: "A public health event focused on stroke prevention, recognition, and treatment, featuring health screenings, educational sessions, and survivor testimonials.",
        image_url: "/images/event4.jpg",
        category: EventCategory::Past,
        full_description: "<p>A public health event on stroke prevention, recognition, and treatment.</p>\
<ul><li>Free stroke risk assessments and health screenings</li><li>Recognizing stroke symptoms using the FAST method</li><li>Survivor testimonials and recovery journeys</li><li>Demonstrations of rehabilitation techniques</li></ul>",
        schedule: &[
            slot("08:00 - 10:00", "Health Screenings and Risk Assessments"),
            slot("10:00 - 11:30", "Opening Ceremony and Expert Panel"),
            slot("11:30 - 12:30", "Stroke Survivor Stories"),
            slot("13:30 - 15:00", "Workshops: Recognizing Stroke Symptoms"),
            slot("15:00 - 16:30", "Rehabilitation Demonstrations"),
            slot("16:30 - 17:00", "Closing Ceremony"),
        ],
        speakers: &[
            speaker("Dr. Bambang Sutrisno", "Indonesian Stroke Society", "Stroke Prevention"),
            speaker("Dr. Ratna Dewi", "Hasan Sadikin Hospital", "Acute Stroke Treatment"),
            speaker("Pak Joko", "Stroke Survivor", "My Recovery Journey"),
        ],
        gallery: &[
            "/images/event4-gallery1.jpg",
            "/images/event4-gallery2.jpg",
            "/images/event4-gallery3.jpg",
            "/images/event4-gallery4.jpg",
        ],
        registration: None,
    },
    Event {
        id: "neurodegenerative-diseases-conference",
        title: "Neurodegenerative Diseases Conference",
        date: "2024-07-15",
        location: "Bali International Convention Center",
        description: "A comprehensive conference on neurodegenerative diseases, bringing together clinicians, researchers, and industry representatives to discuss the latest treatments and research.",
        image_url: "/images/event5.jpg",
        category: EventCategory::Future,
        full_description: "<p>A four-day conference on neurodegenerative diseases for clinicians, researchers, and industry.</p>\
<ul><li>Keynote lectures from world-renowned experts</li><li>Symposia on emerging therapeutic approaches</li><li>Oral and poster presentations</li><li>Industry exhibitions</li></ul>",
        schedule: &[
            slot("Day 1", "Alzheimer's Disease: Current Research and Treatment"),
            slot("Day 2", "Parkinson's Disease and Movement Disorders"),
            slot("Day 3", "ALS and Rare Neurodegenerative Conditions"),
            slot("Day 4", "Future Directions and Collaborative Research"),
        ],
        speakers: &[
            speaker("Prof. Robert Chen", "Johns Hopkins University", "Alzheimer's Disease Biomarkers"),
            speaker("Dr. Elena Petrova", "Oxford University", "Gene Therapy for Neurodegenerative Diseases"),
            speaker("Prof. Takashi Yamada", "Kyoto University", "Stem Cell Approaches to Parkinson's Disease"),
            speaker("Dr. Anita Sharma", "All India Institute of Medical Sciences", "Neurodegenerative Diseases in Asia"),
        ],
        gallery: &[],
        registration: Some(Registration {
            deadline: "2024-06-15",
            fee: "$500 (Early Bird: $400, Students: $250)",
            link: "https://example.com/register-neuro2024",
            limited_spots: Some(800),
        }),
    },
    Event {
        id: "brain-mapping-workshop",
        title: "Advanced Brain Mapping Techniques Workshop",
        date: "2024-02-28",
        location: "Yogyakarta, Indonesia",
        description: "A specialized workshop focusing on the latest brain mapping techniques, including fMRI, EEG, and other neuroimaging methods.",
        image_url: "/images/event6.jpg",
        category: EventCategory::Present,
        full_description: "<p>A five-day workshop on current brain mapping techniques.</p>\
<ul><li>Functional MRI acquisition and analysis</li><li>EEG recording and signal processing</li><li>Multimodal imaging approaches</li><li>Connectivity analysis and network neuroscience</li></ul>",
        schedule: &[
            slot("Day 1", "Introduction to Neuroimaging and Brain Mapping"),
            slot("Day 2", "fMRI Data Acquisition and Preprocessing"),
            slot("Day 3", "EEG Recording and Analysis"),
            slot("Day 4", "Multimodal Imaging and Integration"),
            slot("Day 5", "Advanced Analysis Methods and Applications"),
        ],
        speakers: &[
            speaker("Dr. Wayan Putra", "Gadjah Mada University", "Neuroimaging in Indonesia"),
            speaker("Dr. Jennifer Smith", "University College London", "Advanced fMRI Methods"),
            speaker("Prof. Nguyen Van Minh", "Vietnam National University", "EEG Analysis"),
        ],
        gallery: &["/images/event6-gallery1.jpg", "/images/event6-gallery2.jpg"],
        registration: None,
    },
    Event {
        id: "neuroscience-education-summit",
        title: "Neuroscience Education Summit",
        date: "2024-09-05",
        location: "Surabaya, Indonesia",
        description: "A summit dedicated to integrating neuroscience findings into educational practices, featuring presentations from neuroscientists and educators.",
        image_url: "/images/event7.jpg",
        category: EventCategory::Future,
        full_description: "<p>A summit on bringing neuroscience findings into classroom practice.</p>\
<ul><li>Brain development and learning at different ages</li><li>Cognitive neuroscience of reading and mathematics</li><li>Neurodiversity and inclusive education</li><li>Technology-enhanced learning</li></ul>",
        schedule: &[
            slot("Day 1 - Morning", "Opening and Keynote: Brain Development and Learning"),
            slot("Day 1 - Afternoon", "Parallel Sessions on Cognitive Domains"),
            slot("Day 2 - Morning", "Neurodiversity and Inclusive Education"),
            slot("Day 2 - Afternoon", "Technology and Brain-Based Learning"),
            slot("Day 3", "Workshops and Practical Applications"),
        ],
        speakers: &[
            speaker("Prof. Susan Johnson", "Harvard Graduate School of Education", "Brain Development and Learning"),
            speaker("Dr. Budi Waluyo", "University of Indonesia", "Neuroscience of Reading"),
            speaker("Dr. Mei Lin Tan", "National Institute of Education, Singapore", "Mathematics and the Brain"),
            speaker("Prof. Agus Suwandi", "Airlangga University", "Neurodiversity in Indonesian Classrooms"),
        ],
        gallery: &[],
        registration: Some(Registration {
            deadline: "2024-08-15",
            fee: "Rp 2,000,000 (Early Bird: Rp 1,500,000, Students: Rp 1,000,000)",
            link: "https://example.com/register-neuro-edu",
            limited_spots: Some(300),
        }),
    },
    Event {
        id: "brain-health-expo",
        title: "Brain Health Expo 2023",
        date: "2023-08-12",
        location: "Jakarta Exhibition Center",
        description: "An exhibition showcasing the latest products, services, and research related to brain health and cognitive enhancement.",
        image_url: "/images/event8.jpg",
        category: EventCategory::Past,
        full_description: "<p>An exhibition on brain health products, services, and research.</p>\
<ul><li>Free cognitive assessments and brain health screenings</li><li>Neurofeedback and brain training demonstrations</li><li>Seminars on nutrition, sleep, and stress management</li><li>Activities for children</li></ul>",
        schedule: &[
            slot("Day 1", "Exhibition Opening and Public Access"),
            slot("Day 2", "Professional Day: Healthcare Providers Focus"),
            slot("Day 3", "Family Day: Activities for All Ages"),
        ],
        speakers: &[
            speaker("Dr. Hendro Susilo", "Indonesian Brain Foundation", "Brain Health Across the Lifespan"),
            speaker("Dr. Nadia Wong", "Nutrition Science Institute", "Diet and Cognitive Function"),
            speaker("Prof. James Peterson", "Sleep Research Center", "Sleep and Brain Health"),
        ],
        gallery: &[
            "/images/event8-gallery1.jpg",
            "/images/event8-gallery2.jpg",
            "/images/event8-gallery3.jpg",
        ],
        registration: None,
    },
];

pub static VIDEOS: &[Video] = &[
    Video {
        title: "Simposium Epilepsy 101: Diagnosis dan Tata Laksana Epilepsi",
        video_id: Some("ft5bd96wom"),
        platform: VideoPlatform::Facebook,
    },
    youtube(
        "Irawan Satriotomo: Memahami ABK dari Sudut Pandang Neuroscience - Kelas Diskusi #Akademiability",
        "-rO5j4vUtIU",
    ),
    youtube(
        "Guest Lecture: Neurotransmitter and Cell Signalling - Prof. dr. Irawan Satriotomo, Ph.D., BCMAS",
        "VYSbJ8cmRqg",
    ),
    youtube(
        "BREED #90 Brain Rules | Imam Dermawan, Irawan Satriotomo & Lita Edia",
        "FWosnf0sBes",
    ),
    youtube(
        "Guest Lecture: Animal Model in Neurodegenerative Disease - Prof. dr. Irawan Satriotomo, Ph.D., BCMAS",
        "Q0HGoonyfF8",
    ),
    youtube(
        "Kuliah Umum Visiting Profesor: \"Neuroscience - From Bench to Bedside\"",
        "kJB_9Jcl2BM",
    ),
    youtube(
        "KULIAH TAMU PSIKOLOGI 1 | Cognitive Neuroscience The Biology of Mind Irawan Satriotomo",
        "WYShKJHokI4",
    ),
    youtube(
        "PERKEMBANGAN OTAK & GANGGUAN PERILAKU - Tinjauan dari NEUROLOGIS",
        "xgb0JKtPxe8",
    ),
    youtube(
        "Kuliah Tamu Biopsikologi seri 2 \"NeuroBehavior And Behavioral Problems\" Part 2",
        "etGgzz1GD6A",
    ),
    youtube(
        "Kuliah Tamu Biopsikologi seri 3 \"Brain Health and Wellbeing\"",
        "EnVuD-nltds",
    ),
    youtube(
        "Kuliah Online I-4 - 69 Tahun Merdeka: Quo Vadis Riset & Pendidikan Indonesia",
        "BqdRdhS-dBo",
    ),
    youtube(
        "4 Talks: Mengenal Lebih Dekat Buku 25 Kisah Ilmuwan Indonesia yang Mendunia",
        "AaH3-3KLBVM",
    ),
    youtube(
        "SEMINAR PENINGKATAN CAPAIAN DAN LUARAN PENELITIAN DAN PENGABDIAN MASYRAKAT",
        "A0K5uIki0BQ",
    ),
    youtube(
        "Seminar Nasional Metode IAHF: Tinjauan Medis, Etis, Sosiologis, Politis, Bioetik Islam dan Hukum",
        "qoxltM1gMeE",
    ),
    youtube("Pembicara Kuliah Online I-4", "jZMZ5XXnApU"),
    youtube("Virtual Guest Lecture \"NEUROPLASTICIY\"", "Wn9FAhS_0qU"),
];

pub static PUBLICATIONS: &[Publication] = &[
    research("Folic Acid Treatment for Patients with Vascular Cognitive Impairment: A Systematic Review and Meta-Analysis"),
    research("Adenosine 2A receptor inhibition protects phrenic motor neurons from cell death induced by protein synthesis inhibition"),
    research("Adenosine 2A Receptor Inhibition Promotes Neuroprotection Following Toxic Insult to Phrenic Motor Neurons"),
    research("Long-term Delivery of \u{201c}Low Dose\u{201d} Repetitive Intermittent Hypoxia is Not Associated with Detectable Pathology"),
    research("Enucleation Induces Parvalbumin and Glial Fibrillary Acidic Protein, but Not Calbindin D28k Protein Expression in Superior Colliculus of Wistar Rats"),
    research("EC NEUROLOGY Case Report Persistent Trigeminal Artery Associated with Double Aneurysm"),
    research("Compensatory plasticity in diaphragm and intercostal muscle utilization in a rat model of ALS"),
    research("Mechanisms of Enhanced Phrenic Long-Term Facilitation in SOD1(G93A) Rats"),
    research("Thrice weekly intermittent hypoxia increases expression of key proteins necessary for phrenic long-term facilitation: a possible mechanism of respiratory metaplasticity?"),
    research("Repetitive acute intermittent hypoxia increases growth/neurotrophic factor expression in non-respiratory motor neurons"),
    research("Optimization of a Clinically Relevant Model of White Matter Stroke in Mice: Histological and Functional Evidences"),
    research("Considerations for the Optimization of Induced White Matter Injury Preclinical Models"),
    research("Acute intermittent hypoxia induced phrenic long-term facilitation despite increased SOD1 expression in a rat model of ALS"),
    research("Treatment of stroke related refractory brain edema using mixed vasopressin antagonism: A case report and review of the literature"),
    research("Neither Serotonin nor Adenosine-dependent Mechanisms Preserve Ventilatory Capacity in ALS rats"),
    research("Intermittent Hypoxia and Stem Cell Implants Preserve Breathing Capacity in a Rodent Model Of ALS."),
    research("Repetitive acute intermittent hypoxia increases expression of proteins associated with plasticity in the phrenic motor nucleus"),
    research("Cervical Spinal Erythropoietin Induces Phrenic Motor Facilitation via Extracellular Signal-Regulated Protein Kinase and Akt Signaling"),
    research("Spinal VEGF induced phrenic motor facilitation is unaffected by pretreatment with repetitive acute intermittent hypoxia"),
    research("Repetitive Intermittent Hypoxia Induces Respiratory and Somatic Motor Recovery after Chronic Cervical Spinal Injury"),
    research("Spinal Vascular Endothelial Growth Factor Induces Phrenic Motor Facilitation via Extracellular Signal-Regulated Kinase and Akt Signaling"),
    research("Spinal Plasticity following Intermittent Hypoxia: Implications for Spinal Injury"),
    research("Repetitive Acute Intermittent Hypoxia Increases BDNF and TrkB Expression in Respiratory Motor Neurons: Dose Effects"),
    research("Enhanced Phrenic Long-Term Facilitation (pLTF) Following Repetitive Acute Intermittent Hypoxia"),
];

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Prof. dr. Irawan Satriotomo, Ph.D.",
        role: "Founder & Director",
        bio: "Internationally recognized neuroscientist with expertise in stroke recovery research. Previously affiliated with the University of Wisconsin and now leading Neuroscience Institute to advance neuroscience in Indonesia.",
    },
    TeamMember {
        name: "Dr. Anisa Wijaya",
        role: "Research Director",
        bio: "Specializes in neurodegenerative disorders with a focus on Alzheimer's disease. Leads the research initiatives and international collaborations at Neuroscience Institute.",
    },
    TeamMember {
        name: "Dr. Budi Santoso",
        role: "Education Coordinator",
        bio: "Neurophysiologist with a passion for education. Oversees the training programs and educational initiatives to develop the next generation of Indonesian neuroscientists.",
    },
    TeamMember {
        name: "Maya Putri, M.Sc.",
        role: "Laboratory Manager",
        bio: "Expert in neuroimaging techniques and laboratory management. Ensures the smooth operation of research facilities and equipment at Neuroscience Institute.",
    },
    TeamMember {
        name: "Reza Firmansyah",
        role: "IT & Digital Strategy",
        bio: "Specializes in research data management and digital communications. Manages the institute's online presence and technological infrastructure.",
    },
    TeamMember {
        name: "Siti Rahmah, M.B.A.",
        role: "Administration & Finance",
        bio: "Experienced in non-profit management and fundraising. Handles the administrative and financial aspects of Neuroscience Institute to support its research mission.",
    },
];
