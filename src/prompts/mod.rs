/// Persona and output-format instruction sent as the system message.
pub const SYSTEM_INSTRUCTION: &str = r#"You are FitMealPlanner, a specialized fitness and nutrition expert.

Your task is to create personalized meal and workout plans based on the user's information.

For meal plans:
1. Create a 2-4 week meal plan cycle
2. Include breakfast, lunch, dinner, and snacks
3. Ensure proper caloric intake based on their goals and metrics
4. Include a grocery list for common ingredients
5. Account for any dietary restrictions mentioned
6. Provide clear, structured meal descriptions with macronutrient information

For workout plans:
1. Design a 2-4 week workout routine
2. Tailor exercises to their specific goals (weight loss, muscle gain, flexibility, etc.)
3. Account for their current fitness level and available time
4. Include clear instructions for each exercise with sets, reps, and rest periods
5. Provide a structured weekly schedule
6. Include progression guidelines

Present both plans in a clear, organized format using markdown. Include headers, subheaders, and bullet points where appropriate."#;

/// Served in place of a generated plan whenever the upstream model is unavailable.
pub const FALLBACK_PLAN: &str = r#"
# Personalized 2-Week Meal and Workout Plan

## Your Profile
- Age: 35
- Height: 6'0"
- Weight: 190 lbs
- Goals: Build muscle, improve overall fitness
- Current activity: Light cardio twice weekly
- Preference: High-protein meals

## Meal Plan - Week 1

### Monday
**Breakfast**: Protein oatmeal with berries (40g protein, 60g carbs, 15g fat)
**Lunch**: Grilled chicken salad with olive oil dressing (35g protein, 20g carbs, 15g fat)
**Dinner**: Baked salmon with sweet potato and asparagus (40g protein, 30g carbs, 20g fat)
**Snack**: Greek yogurt with nuts (20g protein, 10g carbs, 15g fat)

### Tuesday
**Breakfast**: Protein smoothie with banana and spinach (30g protein, 40g carbs, 10g fat)
**Lunch**: Turkey and avocado wrap (35g protein, 30g carbs, 20g fat)
**Dinner**: Lean beef stir-fry with vegetables and brown rice (45g protein, 40g carbs, 15g fat)
**Snack**: Protein bar (20g protein, 25g carbs, 10g fat)

## Workout Plan - Week 1

### Monday: Upper Body Strength
- **Warm-up**: 5 minutes light cardio
- **Main workout**:
  - Bench press: 3 sets × 8-10 reps
  - Pull-ups or lat pulldowns: 3 sets × 8-10 reps
  - Overhead press: 3 sets × 8-10 reps
  - Dumbbell rows: 3 sets × 10-12 reps
  - Tricep pushdowns: 3 sets × 12-15 reps
  - Bicep curls: 3 sets × 12-15 reps
- **Cool down**: 5 minutes stretching

### Tuesday: Lower Body Strength
- **Warm-up**: 5 minutes light cardio
- **Main workout**:
  - Squats: 3 sets × 8-10 reps
  - Romanian deadlifts: 3 sets × 8-10 reps
  - Leg press: 3 sets × 10-12 reps
  - Walking lunges: 3 sets × 10 steps each leg
  - Calf raises: 3 sets × 15-20 reps
- **Cool down**: 5 minutes stretching

### Weekly Grocery List
- Lean proteins: Chicken breast, turkey, salmon, lean beef, Greek yogurt
- Complex carbs: Sweet potatoes, brown rice, oats, whole grain wraps
- Vegetables: Spinach, asparagus, mixed stir-fry vegetables
- Fruits: Berries, bananas
- Healthy fats: Olive oil, nuts, avocados
- Extras: Protein powder, protein bars

## Rest & Recovery Tips
- Ensure 7-8 hours of sleep nightly
- Drink at least 3 liters of water daily
- Include 5-10 minutes of stretching after each workout
- Consider foam rolling for muscle recovery

This plan is designed to gradually increase your training volume while providing adequate nutrition for muscle growth and recovery. Adjust portion sizes as needed based on hunger levels and progress.
"#;
