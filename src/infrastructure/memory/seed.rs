use crate::domain::value_objects::{
    internet_plans::InsertInternetPlanModel, jobs::InsertJobModel, products::InsertProductModel,
    restaurants::InsertRestaurantModel,
};

pub fn internet_plans() -> Vec<InsertInternetPlanModel> {
    vec![
        InsertInternetPlanModel {
            name: "Basic Plan".to_string(),
            price: "29.00".to_string(),
            download_speed: "25 Mbps".to_string(),
            upload_speed: "5 Mbps".to_string(),
            data_limit: "500 GB".to_string(),
            features: vec!["24/7 support".to_string()],
            is_popular: false,
        },
        InsertInternetPlanModel {
            name: "Premium Plan".to_string(),
            price: "59.00".to_string(),
            download_speed: "100 Mbps".to_string(),
            upload_speed: "20 Mbps".to_string(),
            data_limit: "Unlimited".to_string(),
            features: vec!["Priority support".to_string()],
            is_popular: true,
        },
        InsertInternetPlanModel {
            name: "Enterprise Plan".to_string(),
            price: "99.00".to_string(),
            download_speed: "500 Mbps".to_string(),
            upload_speed: "100 Mbps".to_string(),
            data_limit: "Unlimited".to_string(),
            features: vec!["Dedicated support".to_string()],
            is_popular: false,
        },
    ]
}

pub fn restaurants() -> Vec<InsertRestaurantModel> {
    vec![
        InsertRestaurantModel {
            name: "Mama's Kitchen".to_string(),
            description: "Traditional local dishes".to_string(),
            rating: "4.8".to_string(),
            category: "Local Cuisine".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=400&h=200&fit=crop"
                    .to_string(),
            ),
        },
        InsertRestaurantModel {
            name: "Tony's Pizza".to_string(),
            description: "Authentic Italian pizza".to_string(),
            rating: "4.2".to_string(),
            category: "Pizza".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400&h=200&fit=crop"
                    .to_string(),
            ),
        },
    ]
}

pub fn products() -> Vec<InsertProductModel> {
    vec![
        InsertProductModel {
            name: "Fresh Vegetables Bundle".to_string(),
            price: "12.99".to_string(),
            store: "Green Valley Market".to_string(),
            category: "Groceries".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=300&h=200&fit=crop"
                    .to_string(),
            ),
        },
        InsertProductModel {
            name: "Smartphone".to_string(),
            price: "299.99".to_string(),
            store: "Tech Zone".to_string(),
            category: "Electronics".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=300&h=200&fit=crop"
                    .to_string(),
            ),
        },
        InsertProductModel {
            name: "Handmade Crafts".to_string(),
            price: "24.99".to_string(),
            store: "Artisan Corner".to_string(),
            category: "Home".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1556228453-efd6c1ff04f6?w=300&h=200&fit=crop"
                    .to_string(),
            ),
        },
    ]
}

pub fn jobs() -> Vec<InsertJobModel> {
    vec![
        InsertJobModel {
            title: "Marketing Assistant".to_string(),
            company: "Digital Agency Co.".to_string(),
            location: "Downtown".to_string(),
            job_type: "Full-time".to_string(),
            salary: "$45,000/year".to_string(),
            description: "Join our dynamic marketing team to help create engaging campaigns for local businesses. Experience with social media and content creation preferred.".to_string(),
        },
        InsertJobModel {
            title: "Restaurant Server".to_string(),
            company: "Mama's Kitchen".to_string(),
            location: "City Center".to_string(),
            job_type: "Part-time".to_string(),
            salary: "$15/hour + tips".to_string(),
            description: "Friendly and energetic server needed for busy local restaurant. Flexible hours, great team environment, and excellent tip potential.".to_string(),
        },
        InsertJobModel {
            title: "Delivery Driver".to_string(),
            company: "QuickDelivery Service".to_string(),
            location: "Various Locations".to_string(),
            job_type: "Flexible".to_string(),
            salary: "$18/hour".to_string(),
            description: "Own vehicle required. Flexible schedule, competitive pay, and fuel allowance. Perfect for students or anyone looking for flexible work.".to_string(),
        },
    ]
}
