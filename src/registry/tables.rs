//! Embedded registry definitions
//!
//! Codes follow the College Scorecard column conventions: `PCIPxx` completion-share
//! columns, `PREDDEG` degree classes, `STABBR` postal abbreviations.
//! Entry order is display order.

use super::CodeRegistry;

pub static FIELDS_OF_STUDY: CodeRegistry<&'static str> = CodeRegistry::new(
    "field of study",
    &[
        ("PCIP01", "Agriculture, Agriculture Operations, And Related Sciences"),
        ("PCIP03", "Natural Resources And Conservation"),
        ("PCIP04", "Architecture And Related Services"),
        ("PCIP05", "Area, Ethnic, Cultural, Gender, And Group Studies"),
        ("PCIP09", "Communication, Journalism, And Related Programs"),
        ("PCIP10", "Communications Technologies/Technicians And Support Services"),
        ("PCIP11", "Computer And Information Sciences And Support Services"),
        ("PCIP12", "Personal And Culinary Services"),
        ("PCIP13", "Education"),
        ("PCIP14", "Engineering"),
        ("PCIP15", "Engineering Technologies And Engineering-Related Fields"),
        ("PCIP16", "Foreign Languages, Literatures, And Linguistics"),
        ("PCIP19", "Family And Consumer Sciences/Human Sciences"),
        ("PCIP22", "Legal Professions And Studies"),
        ("PCIP23", "English Language And Literature/Letters"),
        ("PCIP24", "Liberal Arts And Sciences, General Studies And Humanities"),
        ("PCIP25", "Library Science"),
        ("PCIP26", "Biological And Biomedical Sciences"),
        ("PCIP27", "Mathematics And Statistics"),
        ("PCIP29", "Military Technologies And Applied Sciences"),
        ("PCIP30", "Multi/Interdisciplinary Studies"),
        ("PCIP31", "Parks, Recreation, Leisure, Fitness, And Kinesiology"),
        ("PCIP38", "Philosophy And Religious Studies"),
        ("PCIP39", "Theology And Religious Vocations"),
        ("PCIP40", "Physical Sciences"),
        ("PCIP41", "Science Technologies/Technicians"),
        ("PCIP42", "Psychology"),
        ("PCIP43", "Homeland Security, Law Enforcement, Firefighting, And Related Protective Services"),
        ("PCIP44", "Public Administration And Social Service Professions"),
        ("PCIP45", "Social Sciences"),
        ("PCIP46", "Construction Trades"),
        ("PCIP47", "Mechanic And Repair Technologies/Technicians"),
        ("PCIP48", "Precision Production"),
        ("PCIP49", "Transportation And Materials Moving"),
        ("PCIP50", "Visual And Performing Arts"),
        ("PCIP51", "Health Professions And Related Programs"),
        ("PCIP52", "Business, Management, Marketing, And Related Support Services"),
        ("PCIP54", "History"),
    ],
);

pub static DEGREE_LEVELS: CodeRegistry<u8> = CodeRegistry::new(
    "degree level",
    &[
        (1, "Predominantly Certificate Granting Institution"),
        (2, "Predominantly Associate's Degree Granting Institution"),
        (3, "Predominantly Bachelor's Degree Granting Institution"),
        (4, "Entirely Graduate Degree Granting Institution"),
    ],
);

pub static REGIONS: CodeRegistry<&'static str> = CodeRegistry::new(
    "region",
    &[
        ("AL", "Alabama"),
        ("AK", "Alaska"),
        ("AZ", "Arizona"),
        ("AR", "Arkansas"),
        ("CA", "California"),
        ("CO", "Colorado"),
        ("CT", "Connecticut"),
        ("DE", "Delaware"),
        ("FL", "Florida"),
        ("GA", "Georgia"),
        ("HI", "Hawaii"),
        ("ID", "Idaho"),
        ("IL", "Illinois"),
        ("IN", "Indiana"),
        ("IA", "Iowa"),
        ("KS", "Kansas"),
        ("KY", "Kentucky"),
        ("LA", "Louisiana"),
        ("ME", "Maine"),
        ("MD", "Maryland"),
        ("MA", "Massachusetts"),
        ("MI", "Michigan"),
        ("MN", "Minnesota"),
        ("MS", "Mississippi"),
        ("MO", "Missouri"),
        ("MT", "Montana"),
        ("NE", "Nebraska"),
        ("NV", "Nevada"),
        ("NH", "New Hampshire"),
        ("NJ", "New Jersey"),
        ("NM", "New Mexico"),
        ("NY", "New York"),
        ("NC", "North Carolina"),
        ("ND", "North Dakota"),
        ("OH", "Ohio"),
        ("OK", "Oklahoma"),
        ("OR", "Oregon"),
        ("PA", "Pennsylvania"),
        ("RI", "Rhode Island"),
        ("SC", "South Carolina"),
        ("SD", "South Dakota"),
        ("TN", "Tennessee"),
        ("TX", "Texas"),
        ("UT", "Utah"),
        ("VT", "Vermont"),
        ("VA", "Virginia"),
        ("WA", "Washington"),
        ("WV", "West Virginia"),
        ("WI", "Wisconsin"),
        ("WY", "Wyoming"),
        ("AS", "American Samoa"),
        ("GU", "Guam"),
        ("MP", "Northern Mariana Islands"),
        ("PR", "Puerto Rico"),
        ("FM", "Federated States of Micronesia"),
        ("PW", "Palau"),
        ("VI", "Virgin Islands (U.S.)"),
        ("MH", "Marshall Islands"),
    ],
);
